pub struct CategoryEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub query: &'static str,
}

pub const CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        id: "all",
        label: "All News",
        query: "technology OR AI OR machine learning OR innovation",
    },
    CategoryEntry {
        id: "google",
        label: "Google",
        query: "Google OR Alphabet OR Android OR Chrome",
    },
    CategoryEntry {
        id: "apple",
        label: "Apple",
        query: "Apple OR iPhone OR MacBook OR iOS OR iPadOS",
    },
    CategoryEntry {
        id: "microsoft",
        label: "Microsoft",
        query: "Microsoft OR Windows OR Azure OR Office 365",
    },
    CategoryEntry {
        id: "meta",
        label: "Meta",
        query: "Meta OR Facebook OR Instagram OR WhatsApp OR Oculus",
    },
    CategoryEntry {
        id: "tesla",
        label: "Tesla",
        query: "Tesla OR SpaceX OR Elon Musk electric vehicle",
    },
    CategoryEntry {
        id: "amazon",
        label: "Amazon",
        query: "Amazon OR AWS OR Alexa OR Amazon Web Services",
    },
    CategoryEntry {
        id: "openai",
        label: "OpenAI",
        query: "OpenAI OR ChatGPT OR GPT OR artificial intelligence",
    },
    CategoryEntry {
        id: "nvidia",
        label: "NVIDIA",
        query: "NVIDIA OR GPU OR graphics card OR AI chip",
    },
];

pub fn lookup(id: &str) -> Option<&'static CategoryEntry> {
    CATEGORIES.iter().find(|entry| entry.id == id)
}

pub fn default_entry() -> &'static CategoryEntry {
    &CATEGORIES[0]
}
