//! Word-frequency corpora backing the language classifier
//!
//! Each corpus holds a small sample of high-frequency words for one
//! language, bucketed by grammatical category. The classifier only counts
//! occurrences, so the buckets exist for maintainability rather than
//! scoring; all words weigh the same.

/// Common-word sample for a single language
pub struct LanguageCorpus {
    pub code: &'static str,
    /// (category, words) — all words lowercase
    pub categories: &'static [(&'static str, &'static [&'static str])],
}

impl LanguageCorpus {
    /// Iterate every word in the corpus across all categories
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().flat_map(|(_, words)| words.iter().copied())
    }
}

/// Built-in corpora, in registration order
///
/// Registration order is the classifier's tie-break order: a language later
/// in this slice must score strictly higher than every earlier one to win.
/// English is first, so ties and zero-score input resolve to English.
pub const CORPORA: &[LanguageCorpus] = &[
    LanguageCorpus {
        code: "en",
        categories: &[
            ("greetings", &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"]),
            ("farewells", &["goodbye", "bye", "see you", "see you later", "take care"]),
            ("questions", &["what", "where", "when", "why", "how", "who"]),
            ("pronouns", &["i", "you", "he", "she", "it", "we", "they"]),
            ("verbs", &["am", "is", "are", "was", "were", "have", "has", "had", "do", "does", "did"]),
            ("nouns", &["world", "day", "time", "year", "people", "way", "thing", "man", "woman", "child"]),
            ("adjectives", &["good", "new", "first", "last", "long", "great", "little", "own", "other", "old"]),
            ("conjunctions", &["and", "but", "or", "because", "if", "when", "that", "while", "although"]),
            ("prepositions", &["in", "on", "at", "with", "by", "for", "from", "to", "of", "about"]),
        ],
    },
    LanguageCorpus {
        code: "es",
        categories: &[
            ("greetings", &["hola", "buenos días", "buenas tardes", "buenas noches"]),
            ("farewells", &["adiós", "hasta luego", "hasta pronto", "nos vemos", "cuídate"]),
            ("questions", &["qué", "dónde", "cuándo", "por qué", "cómo", "quién"]),
            ("pronouns", &["yo", "tú", "él", "ella", "nosotros", "ellos", "ellas"]),
            ("verbs", &["soy", "eres", "es", "somos", "son", "tengo", "tienes", "tiene", "tenemos", "tienen"]),
            ("nouns", &["mundo", "día", "tiempo", "año", "gente", "manera", "cosa", "hombre", "mujer", "niño"]),
            ("adjectives", &["bueno", "nuevo", "primero", "último", "largo", "gran", "pequeño", "propio", "otro", "viejo"]),
            ("conjunctions", &["y", "pero", "o", "porque", "si", "cuando", "que", "mientras", "aunque"]),
            ("prepositions", &["en", "sobre", "con", "por", "para", "desde", "hasta", "de", "acerca de"]),
        ],
    },
    LanguageCorpus {
        code: "fr",
        categories: &[
            ("greetings", &["bonjour", "salut", "bonsoir"]),
            ("farewells", &["au revoir", "à bientôt", "à plus tard", "adieu", "prenez soin de vous"]),
            ("questions", &["quoi", "où", "quand", "pourquoi", "comment", "qui"]),
            ("pronouns", &["je", "tu", "il", "elle", "nous", "ils", "elles"]),
            ("verbs", &["suis", "es", "est", "sommes", "sont", "ai", "as", "a", "avons", "ont"]),
            ("nouns", &["monde", "jour", "temps", "année", "gens", "façon", "chose", "homme", "femme", "enfant"]),
            ("adjectives", &["bon", "nouveau", "premier", "dernier", "long", "grand", "petit", "propre", "autre", "vieux"]),
            ("conjunctions", &["et", "mais", "ou", "parce que", "si", "quand", "que", "pendant que", "bien que"]),
            ("prepositions", &["dans", "sur", "à", "avec", "par", "pour", "de", "vers", "au sujet de"]),
        ],
    },
    LanguageCorpus {
        code: "de",
        categories: &[
            ("greetings", &["hallo", "guten morgen", "guten tag", "guten abend"]),
            ("farewells", &["auf wiedersehen", "tschüss", "bis später", "bis bald", "pass auf dich auf"]),
            ("questions", &["was", "wo", "wann", "warum", "wie", "wer"]),
            ("pronouns", &["ich", "du", "er", "sie", "es", "wir", "sie"]),
            ("verbs", &["bin", "bist", "ist", "sind", "habe", "hast", "hat", "haben"]),
            ("nouns", &["welt", "tag", "zeit", "jahr", "leute", "weg", "ding", "mann", "frau", "kind"]),
            ("adjectives", &["gut", "neu", "erst", "letzt", "lang", "groß", "klein", "eigen", "ander", "alt"]),
            ("conjunctions", &["und", "aber", "oder", "weil", "wenn", "als", "dass", "während", "obwohl"]),
            ("prepositions", &["in", "auf", "an", "mit", "durch", "für", "von", "zu", "über"]),
        ],
    },
    LanguageCorpus {
        code: "zh-cn",
        categories: &[
            ("greetings", &["你好", "早上好", "下午好", "晚上好"]),
            ("farewells", &["再见", "拜拜", "回头见", "保重"]),
            ("questions", &["什么", "哪里", "何时", "为什么", "怎么样", "谁"]),
            ("pronouns", &["我", "你", "他", "她", "它", "我们", "他们"]),
            ("verbs", &["是", "有", "做", "去", "来", "看", "说", "想", "知道", "认为"]),
            ("nouns", &["世界", "日子", "时间", "年", "人们", "方式", "事情", "男人", "女人", "孩子"]),
            ("adjectives", &["好", "新", "第一", "最后", "长", "伟大", "小", "自己的", "其他", "老"]),
            ("conjunctions", &["和", "但是", "或者", "因为", "如果", "当", "那", "而", "虽然"]),
            ("prepositions", &["在", "上", "于", "与", "由", "为", "从", "到", "关于"]),
        ],
    },
];
