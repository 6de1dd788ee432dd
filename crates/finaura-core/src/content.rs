//! Copy for the marketing page.
//!
//! The home page and the `/website` variant render from this single table.

/// A card in a grid: title plus descriptive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardItem {
    pub title: &'static str,
    pub text: &'static str,
}

/// A module card in the module overview; links to the module's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCard {
    pub href: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Everything the marketing page shows, in page order.
#[derive(Debug, Clone, Copy)]
pub struct MarketingContent {
    pub badge: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
    pub trust: &'static [&'static str],
    pub values: &'static [CardItem],
    pub steps_heading: &'static str,
    pub steps: &'static [CardItem],
    pub modules_heading: &'static str,
    pub modules_lead: &'static str,
    pub modules: &'static [ModuleCard],
    pub signup_heading: &'static str,
    pub signup_lead: &'static str,
    pub signup_note: &'static str,
    pub cta_heading: &'static str,
    pub cta_lead: &'static str,
}

/// Anchor of the "how it works" list.
pub const HOW_IT_WORKS_ANCHOR: &str = "wie-es-funktioniert";

/// Anchor of the module overview grid.
pub const MODULES_ANCHOR: &str = "module";

/// Anchor of the mailing-list signup.
pub const SIGNUP_ANCHOR: &str = "start-anonym";

pub const MARKETING: MarketingContent = MarketingContent {
    badge: "Schweizer FinTech",
    heading: "FINAURA — Schweizer Finanzklarheit, anonym und neutral.",
    lead: "Verstehe deine Finanzen wie ein Profi — ohne Datenpreisgabe, ohne Verkaufsdruck. \
           Analyse. Verständnis. Sicherheit — in wenigen Minuten.",
    trust: &["100% anonym", "Swiss Precision", "Keine Werbung"],
    values: &[
        CardItem {
            title: "Neutralität",
            text: "Unabhängig. Keine Produktverkäufe. Dein Vorteil steht im Zentrum.",
        },
        CardItem {
            title: "Anonymität",
            text: "Starte ohne Login oder Datenpreisgabe. Du behältst die Kontrolle.",
        },
        CardItem {
            title: "Swiss Precision",
            text: "Klar, fundiert, verständlich – für Entscheidungen mit gutem Gefühl.",
        },
    ],
    steps_heading: "So funktioniert’s",
    steps: &[
        CardItem {
            title: "Thema wählen",
            text: "AHV, BVG, Säule 3a oder Budget – du entscheidest, womit du beginnst.",
        },
        CardItem {
            title: "Anonym eingeben",
            text: "Nur die Angaben, die es wirklich braucht. Kein Konto, keine E-Mail.",
        },
        CardItem {
            title: "Klarheit erhalten",
            text: "Verständliche Auswertung mit den nächsten sinnvollen Schritten.",
        },
    ],
    modules_heading: "Module & Wege zur Klarheit",
    modules_lead: "Wähle dein Thema – kurz, fokussiert und verständlich.",
    modules: &[
        ModuleCard {
            href: "/ik",
            title: "IK-Analyse (AHV)",
            text: "Beiträge & Lücken verstehen. Grundlage für Entscheidungen.",
        },
        ModuleCard {
            href: "/bvg",
            title: "BVG / Pensionskasse",
            text: "Einkäufe, Leistungen & Optionen einschätzen.",
        },
        ModuleCard {
            href: "/3a",
            title: "Säule 3a",
            text: "Sinnvoll nutzen – steuerlich und strategisch.",
        },
        ModuleCard {
            href: "/budget",
            title: "Budget & Liquidität",
            text: "Was ist drin? Welche Spielräume hast du wirklich?",
        },
        ModuleCard {
            href: "/zukunft",
            title: "Zukunft & Vorsorge",
            text: "Rente, Kapital oder Mischung: Was passt zu dir?",
        },
        ModuleCard {
            href: "/micro-advice",
            title: "Micro-Advice",
            text: "Kurze, anonyme Expertenantworten – fair bewertet.",
        },
    ],
    signup_heading: "Als Erste:r erfahren, wenn es losgeht",
    signup_lead: "Trag dich in die Liste ein. Wir melden uns, sobald die ersten Module live sind.",
    signup_note: "Nur für Updates zu FINAURA. Abmeldung jederzeit.",
    cta_heading: "Starte jetzt anonym – und gewinne Klarheit in Minuten.",
    cta_lead: "Keine Registrierung. Keine Werbung. Nur gute Antworten.",
};

/// Impressum copy.
pub const IMPRESSUM_PARAGRAPHS: &[&str] = &[
    "Angaben gemäss schweizerischem Recht. Verantwortlich für den Inhalt: FINAURA.",
    "Kontakt: hello@finaura.ch",
];

/// Privacy policy copy.
pub const PRIVACY_PARAGRAPHS: &[&str] = &[
    "FINAURA legt grössten Wert auf Datenschutz und Anonymität. Die Nutzung unserer \
     Analysefunktionen ist ohne Registrierung möglich. Erhobene Eingaben dienen \
     ausschliesslich der Bereitstellung der Dienstleistung und werden nicht zu \
     Werbezwecken verwendet.",
    "Für die Anmeldung zur Mailingliste nutzen wir einen externen Formulardienst. \
     Die dort eingegebene E-Mail-Adresse wird direkt an diesen Dienst übermittelt.",
    "Kontakt für Datenschutzanfragen: privacy@finaura.ch",
];

/// AV-Vorbezug stub copy.
pub const AV_VORBEZUG_LEAD: &str =
    "Hier entsteht Ihr kostenloses Tool zum AV-Vorbezug – verständlich, anonym, neutral.";
pub const AV_VORBEZUG_NOTE: &str =
    "In Kürze verfügbar: Eingaben links, Auswertung rechts – wie besprochen.";
