//! Built-in English word lists.
//!
//! These back [`AnalyzerConfig::default`](crate::AnalyzerConfig). Every singular form in
//! [`PLURAL_SINGULAR`] is absent from its left-hand column, which keeps normalization
//! idempotent.

/// Function words that never make useful keywords.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "even",
    "ever", "every", "few", "for", "from", "further", "get", "gets", "got", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "let", "like", "made", "make",
    "many", "may", "me", "might", "more", "most", "much", "must", "my", "myself", "new", "no",
    "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "per", "same", "say", "says", "see", "she", "should", "so",
    "some", "still", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "thus", "to", "too", "under",
    "until", "up", "upon", "us", "use", "used", "using", "very", "via", "was", "we", "well",
    "were", "what", "when", "where", "whether", "which", "while", "who", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Exact plural to singular folds. No suffix rules are applied beyond this table.
pub const PLURAL_SINGULAR: &[(&str, &str)] = &[
    ("addresses", "address"),
    ("analyses", "analysis"),
    ("applications", "application"),
    ("apps", "app"),
    ("articles", "article"),
    ("blogs", "blog"),
    ("books", "book"),
    ("boxes", "box"),
    ("buses", "bus"),
    ("businesses", "business"),
    ("categories", "category"),
    ("children", "child"),
    ("cities", "city"),
    ("classes", "class"),
    ("companies", "company"),
    ("countries", "country"),
    ("courses", "course"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("customers", "customer"),
    ("designs", "design"),
    ("developers", "developer"),
    ("diagnoses", "diagnosis"),
    ("dishes", "dish"),
    ("entries", "entry"),
    ("events", "event"),
    ("examples", "example"),
    ("features", "feature"),
    ("feet", "foot"),
    ("files", "file"),
    ("frameworks", "framework"),
    ("games", "game"),
    ("geese", "goose"),
    ("guides", "guide"),
    ("halves", "half"),
    ("heroes", "hero"),
    ("hypotheses", "hypothesis"),
    ("images", "image"),
    ("indices", "index"),
    ("jobs", "job"),
    ("keywords", "keyword"),
    ("knives", "knife"),
    ("languages", "language"),
    ("leaves", "leaf"),
    ("libraries", "library"),
    ("links", "link"),
    ("lives", "life"),
    ("matches", "match"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("models", "model"),
    ("pages", "page"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("policies", "policy"),
    ("posts", "post"),
    ("potatoes", "potato"),
    ("prices", "price"),
    ("processes", "process"),
    ("products", "product"),
    ("projects", "project"),
    ("queries", "query"),
    ("recipes", "recipe"),
    ("results", "result"),
    ("reviews", "review"),
    ("searches", "search"),
    ("services", "service"),
    ("shelves", "shelf"),
    ("sites", "site"),
    ("solutions", "solution"),
    ("stories", "story"),
    ("studies", "study"),
    ("systems", "system"),
    ("tags", "tag"),
    ("technologies", "technology"),
    ("teeth", "tooth"),
    ("tests", "test"),
    ("theses", "thesis"),
    ("tomatoes", "tomato"),
    ("tools", "tool"),
    ("tutorials", "tutorial"),
    ("users", "user"),
    ("videos", "video"),
    ("watches", "watch"),
    ("websites", "website"),
    ("wishes", "wish"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
    ("words", "word"),
];

/// Words that end like plurals but must never be folded.
pub const INVARIANT_WORDS: &[&str] = &[
    "access", "address", "analysis", "aws", "bonus", "bus", "business", "campus", "canvas",
    "chaos", "class", "css", "data", "economics", "ethics", "focus", "gas", "github", "ios",
    "kubernetes", "lens", "less", "mathematics", "means", "news", "physics", "politics",
    "process", "sass", "series", "species", "status", "virus", "windows",
];
