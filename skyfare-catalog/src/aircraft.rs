/// Airframes appearing in the synthetic schedule
pub const AIRCRAFT: [&str; 6] = [
    "Boeing 737",
    "Boeing 777",
    "Boeing 787",
    "Airbus A320",
    "Airbus A330",
    "Airbus A350",
];
