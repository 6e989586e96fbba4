use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactService {
    AllEmergency,
    Fire,
    Police,
    Medical,
    DisasterManagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub service: ContactService,
    pub name: &'static str,
    pub number: &'static str,
}

static CONTACTS: [EmergencyContact; 5] = [
    EmergencyContact {
        service: ContactService::AllEmergency,
        name: "Emergency Services",
        number: "112",
    },
    EmergencyContact {
        service: ContactService::Fire,
        name: "Fire Department",
        number: "101",
    },
    EmergencyContact {
        service: ContactService::Police,
        name: "Police",
        number: "100",
    },
    EmergencyContact {
        service: ContactService::Medical,
        name: "Medical Emergency",
        number: "108",
    },
    EmergencyContact {
        service: ContactService::DisasterManagement,
        name: "Disaster Management",
        number: "1077",
    },
];

pub fn emergency_contacts() -> &'static [EmergencyContact] {
    &CONTACTS
}

/// The four numbers every general-purpose reply must list.
pub fn core_contacts() -> &'static [EmergencyContact] {
    &CONTACTS[..4]
}
