use crate::models::GuidanceCategory;

const EARTHQUAKE: &str = "🏠 **Earthquake Safety Protocol:**\n\n1. **DROP** - Get down on hands and knees\n2. **COVER** - Take cover under a sturdy desk/table\n3. **HOLD ON** - Hold onto your shelter until the shaking stops\n4. **Stay inside** - Keep away from windows and heavy objects\n\n🚨 If you're experiencing an earthquake NOW, follow these steps immediately! If you are trapped or in immediate danger, call emergency services at **112**.";

const FIRE: &str = "🔥 **Fire Emergency Protocol:**\n\n1. **Alert others** - Shout 'FIRE!'\n2. **Get low** - Crawl under smoke\n3. **Check doors** - Feel for heat before opening\n4. **Get out fast** - Use nearest safe exit\n5. **Call 101** - Fire department\n\n🚨 **If in immediate danger, evacuate NOW and call emergency services at 112!**";

const FLOOD: &str = "🌊 **Flood Safety Protocol:**\n\n1. **Move to higher ground** immediately\n2. **Avoid walking/driving** through flood water\n3. **Turn off utilities** if safe to do so\n4. **Stay informed** - Monitor weather alerts\n\n💡 **Remember:** 6 inches of moving water can knock you down. 1 foot can sweep away a vehicle.\n\n🚨 **If you are trapped or in immediate danger, call emergency services at 112!**";

const CYCLONE: &str = "🌪️ **Cyclone Safety Protocol:**\n\n1. **Seek shelter** in interior room, lowest floor\n2. **Stay away** from windows and doors\n3. **Have emergency kit** ready (water, food, flashlight)\n4. **Monitor alerts** on battery radio\n\n⚡ **Never go outside during the eye of the storm!**\n\n🚨 **If in immediate danger, call emergency services at 112.**";

const GENERAL_EMERGENCY: &str = "🚨 **Emergency Assistance Available:**\n\n1. **Get to safety** - Move away from the immediate hazard\n2. **Call for help** using the numbers below\n3. **Describe your situation** so I can provide specific guidance\n\n**Immediate Help:**\n📞 **112** - All Emergency Services\n📞 **101** - Fire Department\n📞 **100** - Police\n📞 **108** - Medical Emergency\n\n💡 **Remember:** If someone is injured or in immediate danger, call emergency services first, then I can help with additional guidance.";

const MEDICAL: &str = "🏥 **Medical Emergency Protocol:**\n\n**Call 108 immediately for medical emergencies!**\n\n**Basic First Aid:**\n1. **Check responsiveness** - Tap shoulders, shout\n2. **Check breathing** - Look, listen, feel\n3. **Control bleeding** - Apply direct pressure\n4. **Don't move** severely injured persons\n\n🩹 **For minor injuries:** Clean wound, apply bandage.\n\n🚨 **For serious injuries or immediate danger:** call emergency services at 108 or 112 and keep the patient calm.";

const EVACUATION: &str = "🏃 **Evacuation Protocol:**\n\n**Before Leaving:**\n1. **Grab emergency kit** (documents, medicine, water)\n2. **Turn off utilities** (gas, electricity)\n3. **Lock doors** behind you\n\n**During Evacuation:**\n4. **Follow designated routes** only\n5. **Stay calm** and help others\n6. **Check in** with family/friends\n\n📍 **Know your evacuation routes and meeting points!** Disaster management helpline: **1077**.\n\n🚨 **If you cannot get out or are in immediate danger, call emergency services at 112.**";

const PREPAREDNESS: &str = "🎒 **Emergency Kit Essentials:**\n\n**Basic Supplies (72 hours):**\n1. 💧 Water - 3 liters per person per day\n2. 🍞 Non-perishable food\n3. 🔦 Flashlight + extra batteries\n4. 📻 Battery/hand-crank radio\n5. 💊 Medications\n6. 📄 Important documents (waterproof container)\n7. 💰 Cash\n8. 🧥 Warm clothing\n\n**Additional:** First aid kit, whistle, duct tape, garbage bags, personal hygiene items.\n\n🚨 **If you are in immediate danger, call emergency services at 112 first.**";

const FALLBACK: &str = "🤖 **Emergency Assistant Ready!**\n\nI can help with:\n1. 🏠 **Disaster protocols** (earthquake, fire, flood, cyclone)\n2. 🚨 **Emergency procedures** and evacuation\n3. 📞 **Emergency contacts**\n4. 🎒 **Preparedness planning**\n5. 🏥 **Basic first aid guidance**\n\n**Emergency numbers:**\n📞 **112** - All Emergency Services\n📞 **101** - Fire Department\n📞 **100** - Police\n📞 **108** - Medical Emergency\n\n🚨 **If you are in immediate danger, call emergency services at 112 first!**\n\nI didn't recognise a specific emergency in your message. Could you tell me again what you need help with?";

impl GuidanceCategory {
    /// Canonical response text. Every template carries a numbered protocol,
    /// at least one emergency number and an instruction to call emergency
    /// services when in immediate danger.
    pub fn template(self) -> &'static str {
        match self {
            Self::Earthquake => EARTHQUAKE,
            Self::Fire => FIRE,
            Self::Flood => FLOOD,
            Self::Cyclone => CYCLONE,
            Self::GeneralEmergency => GENERAL_EMERGENCY,
            Self::Medical => MEDICAL,
            Self::Evacuation => EVACUATION,
            Self::Preparedness => PREPAREDNESS,
            Self::Fallback => FALLBACK,
        }
    }
}
