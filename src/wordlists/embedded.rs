//! Embedded word lists
//!
//! Compiled into the binary so the solver works without any data files.

/// Aviation and airline vocabulary, merged into every lexicon by default
pub const DOMAIN_WORDS: &[&str] = &[
    "aircraft", "airline", "airport", "aisle", "allergy", "alliance", "allotment", "altitude",
    "ancillary", "announcement", "apron", "approach", "arrival", "automation", "autopilot",
    "aviation", "baggage", "base", "belt", "blackbox", "boarding", "bridge", "business",
    "cabin", "cancellation", "captain", "cargo", "carousel", "carryon", "charter", "check",
    "checkin", "class", "cockpit", "compartment", "competition", "compliance", "connection",
    "control", "crew", "customs", "damage", "delay", "delayed", "departure", "deplane",
    "diversion", "down", "duty", "economy", "emergency", "engine", "entertainment",
    "equipment", "exit", "fare", "first", "fleet", "flight", "flyer", "frequent", "fuel",
    "fuselage", "galley", "gate", "ground", "handling", "hangar", "hub", "immigration",
    "in", "itinerary", "jet", "jetway", "landing", "layover", "leasing", "life", "lifejacket",
    "list", "logistics", "lounge", "luggage", "maintenance", "market", "mask", "meal",
    "mileage", "minimum", "navigation", "network", "of", "on", "operations", "out",
    "overhead", "oversized", "oxygen", "partnership", "pass", "passenger", "passport",
    "pilot", "procedure", "propeller", "radar", "refund", "regulation", "reroute",
    "reservation", "revenue", "route", "runway", "safety", "schedule", "seat", "security",
    "service", "simulator", "speed", "steward", "stopover", "subsidiary", "takeoff",
    "taxi", "taxiway", "terminal", "ticket", "time", "touch", "tower", "training",
    "transfer", "tray", "turbulence", "upgrade", "vest", "visa", "weather", "wifi", "wing",
];

/// Default benchmark set of airline words and phrases
pub const SAMPLE_PHRASES: &[&str] = &[
    "ancillary", "revenue", "blackbox", "boarding", "aircraft", "passenger",
    "cabin", "crew", "baggage", "airport", "terminal", "fuel", "runway",
    "delayed", "flight", "ticket", "reservation", "upgrade", "economy",
    "business", "first", "lounge", "security", "customs", "arrival", "departure",
    "hub", "route", "schedule", "pilot", "engine", "gate", "overhead", "checkin",
    "carryon", "regulation", "compliance", "network", "alliance", "operations",
    "procedure", "automation", "safety", "maintenance", "ground", "service",
    "boarding pass", "airline", "aviation", "weather", "delay", "cancellation",
    "control", "tower", "emergency", "oxygen", "mask", "announcement",
    "entertainment", "wifi", "seat", "belt", "lifejacket", "turbulence",
    "approach", "landing", "takeoff", "altitude", "speed", "navigation",
    "radar", "cockpit", "training", "simulator", "charter", "cargo",
    "logistics", "fleet", "leasing", "partnership", "subsidiary", "market",
    "competition", "allotment", "ancillary revenue", "on time", "delayed flight",
    "ground handling", "cabin crew", "check in", "frequent flyer", "jet bridge",
    "boarding gate", "flight schedule", "safety procedure", "passenger service",
    "ground damage", "out of service", "flight reroute", "oversized baggage",
    "overhead compartment", "life vest", "touch down", "minimum equipment list",
    "base maintenance",
];

/// Small general English vocabulary used when no dictionary file is given
pub const COMMON_WORDS: &[&str] = &[
    "a", "about", "after", "again", "air", "all", "also", "an", "and", "any", "area", "as",
    "at", "away", "back", "be", "because", "been", "before", "being", "best", "between",
    "big", "both", "but", "by", "call", "came", "can", "car", "case", "change", "city",
    "come", "could", "day", "did", "do", "does", "each", "early", "end", "even", "every",
    "family", "far", "few", "find", "for", "from", "get", "give", "go", "good", "great",
    "group", "had", "hand", "has", "have", "he", "help", "her", "here", "high", "him",
    "his", "home", "house", "how", "if", "into", "is", "it", "its", "just", "keep", "kind",
    "know", "large", "last", "late", "leave", "left", "light", "like", "line", "little",
    "long", "look", "made", "make", "man", "many", "may", "me", "might", "more", "most",
    "move", "much", "must", "my", "name", "need", "never", "new", "next", "night", "no",
    "not", "now", "number", "off", "old", "one", "only", "open", "or", "order", "other",
    "our", "over", "own", "part", "people", "place", "plan", "point", "public", "put",
    "question", "quick", "right", "room", "same", "say", "see", "she", "should", "show",
    "side", "since", "small", "so", "some", "start", "state", "still", "such", "system",
    "take", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "thing", "think", "this", "those", "three", "through", "to", "too", "travel", "trip",
    "two", "under", "up", "use", "very", "want", "was", "water", "way", "we", "well",
    "were", "what", "when", "where", "which", "while", "who", "why", "will", "with",
    "work", "world", "would", "year", "you", "your", "zone",
];
