//! Bilingual phrase table
//!
//! A small static dictionary of everyday phrases, keyed by a canonical
//! lowercase English form. The pseudo-translation pipeline substitutes
//! these before resorting to fabricated text. A missing language entry on a
//! row means "no direct phrase translation available" — it is not an error.

/// One canonical phrase and its known translations
pub struct PhraseEntry {
    /// Lowercase English phrase used as the dictionary key
    pub canonical: &'static str,
    /// (language code, translation) pairs
    pub translations: &'static [(&'static str, &'static str)],
}

impl PhraseEntry {
    /// Translation of this phrase into `target`, if known
    pub fn translation(&self, target: &str) -> Option<&'static str> {
        self.translations
            .iter()
            .find(|(lang, _)| *lang == target)
            .map(|(_, text)| *text)
    }
}

/// Table-level lookup: exact canonical phrase into `target`
pub fn translation(phrase: &str, target: &str) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|entry| entry.canonical == phrase)
        .and_then(|entry| entry.translation(target))
}

/// Built-in phrase table, in registration (scan) order
pub static PHRASES: &[PhraseEntry] = &[
    PhraseEntry {
        canonical: "hello",
        translations: &[
            ("es", "hola"), ("fr", "bonjour"), ("de", "hallo"), ("it", "ciao"),
            ("pt", "olá"), ("ru", "привет"), ("zh-cn", "你好"), ("ja", "こんにちは"),
            ("ko", "안녕하세요"), ("ar", "مرحبا"), ("hi", "नमस्ते"), ("th", "สวัสดี"),
        ],
    },
    PhraseEntry {
        canonical: "how are you",
        translations: &[
            ("es", "cómo estás"), ("fr", "comment allez-vous"), ("de", "wie geht es dir"),
            ("it", "come stai"), ("pt", "como está"), ("ru", "как дела"),
            ("zh-cn", "你好吗"), ("ja", "お元気ですか"), ("ko", "어떻게 지내세요"),
            ("ar", "كيف حالك"), ("hi", "आप कैसे हैं"), ("th", "คุณเป็นอย่างไรบ้าง"),
        ],
    },
    PhraseEntry {
        canonical: "thank you",
        translations: &[
            ("es", "gracias"), ("fr", "merci"), ("de", "danke"), ("it", "grazie"),
            ("pt", "obrigado"), ("ru", "спасибо"), ("zh-cn", "谢谢"), ("ja", "ありがとう"),
            ("ko", "감사합니다"), ("ar", "شكرا لك"), ("hi", "धन्यवाद"), ("th", "ขอบคุณ"),
        ],
    },
    PhraseEntry {
        canonical: "goodbye",
        translations: &[
            ("es", "adiós"), ("fr", "au revoir"), ("de", "auf wiedersehen"),
            ("it", "arrivederci"), ("pt", "adeus"), ("ru", "до свидания"),
            ("zh-cn", "再见"), ("ja", "さようなら"), ("ko", "안녕히 가세요"),
            ("ar", "مع السلامة"), ("hi", "अलविदा"), ("th", "ลาก่อน"),
        ],
    },
    PhraseEntry {
        canonical: "yes",
        translations: &[
            ("es", "sí"), ("fr", "oui"), ("de", "ja"), ("it", "sì"), ("pt", "sim"),
            ("ru", "да"), ("zh-cn", "是"), ("ja", "はい"), ("ko", "네"), ("ar", "نعم"),
            ("hi", "हां"), ("th", "ใช่"),
        ],
    },
    PhraseEntry {
        canonical: "no",
        translations: &[
            ("es", "no"), ("fr", "non"), ("de", "nein"), ("it", "no"), ("pt", "não"),
            ("ru", "нет"), ("zh-cn", "不"), ("ja", "いいえ"), ("ko", "아니요"),
            ("ar", "لا"), ("hi", "नहीं"), ("th", "ไม่"),
        ],
    },
    PhraseEntry {
        canonical: "please",
        translations: &[
            ("es", "por favor"), ("fr", "s'il vous plaît"), ("de", "bitte"),
            ("it", "per favore"), ("pt", "por favor"), ("ru", "пожалуйста"),
            ("zh-cn", "请"), ("ja", "お願いします"), ("ko", "부탁합니다"),
            ("ar", "من فضلك"), ("hi", "कृपया"), ("th", "กรุณา"),
        ],
    },
    PhraseEntry {
        canonical: "sorry",
        translations: &[
            ("es", "lo siento"), ("fr", "désolé"), ("de", "entschuldigung"),
            ("it", "mi dispiace"), ("pt", "desculpe"), ("ru", "извините"),
            ("zh-cn", "对不起"), ("ja", "すみません"), ("ko", "죄송합니다"),
            ("ar", "آسف"), ("hi", "माफ़ करें"), ("th", "ขอโทษ"),
        ],
    },
    PhraseEntry {
        canonical: "excuse me",
        translations: &[
            ("es", "disculpe"), ("fr", "excusez-moi"), ("de", "entschuldigen sie"),
            ("it", "scusi"), ("pt", "com licença"), ("ru", "извините"),
            ("zh-cn", "打扰一下"), ("ja", "すみません"), ("ko", "실례합니다"),
            ("ar", "عذرا"), ("hi", "क्षमा करें"), ("th", "ขอโทษนะ"),
        ],
    },
    PhraseEntry {
        canonical: "good morning",
        translations: &[
            ("es", "buenos días"), ("fr", "bonjour"), ("de", "guten morgen"),
            ("it", "buongiorno"), ("pt", "bom dia"), ("ru", "доброе утро"),
            ("zh-cn", "早上好"), ("ja", "おはようございます"), ("ko", "좋은 아침입니다"),
            ("ar", "صباح الخير"), ("hi", "सुप्रभात"), ("th", "สวัสดีตอนเช้า"),
        ],
    },
    PhraseEntry {
        canonical: "good afternoon",
        translations: &[
            ("es", "buenas tardes"), ("fr", "bon après-midi"), ("de", "guten tag"),
            ("it", "buon pomeriggio"), ("pt", "boa tarde"), ("ru", "добрый день"),
            ("zh-cn", "下午好"), ("ja", "こんにちは"), ("ko", "좋은 오후입니다"),
            ("ar", "مساء الخير"), ("hi", "शुभ दोपहर"), ("th", "สวัสดีตอนบ่าย"),
        ],
    },
    PhraseEntry {
        canonical: "good evening",
        translations: &[
            ("es", "buenas tardes"), ("fr", "bonsoir"), ("de", "guten abend"),
            ("it", "buonasera"), ("pt", "boa noite"), ("ru", "добрый вечер"),
            ("zh-cn", "晚上好"), ("ja", "こんばんは"), ("ko", "좋은 저녁입니다"),
            ("ar", "مساء الخير"), ("hi", "शुभ संध्या"), ("th", "สวัสดีตอนเย็น"),
        ],
    },
    PhraseEntry {
        canonical: "good night",
        translations: &[
            ("es", "buenas noches"), ("fr", "bonne nuit"), ("de", "gute nacht"),
            ("it", "buonanotte"), ("pt", "boa noite"), ("ru", "спокойной ночи"),
            ("zh-cn", "晚安"), ("ja", "おやすみなさい"), ("ko", "안녕히 주무세요"),
            ("ar", "تصبح على خير"), ("hi", "शुभ रात्रि"), ("th", "ราตรีสวัสดิ์"),
        ],
    },
    PhraseEntry {
        canonical: "my name is",
        translations: &[
            ("es", "me llamo"), ("fr", "je m'appelle"), ("de", "ich heiße"),
            ("it", "mi chiamo"), ("pt", "meu nome é"), ("ru", "меня зовут"),
            ("zh-cn", "我的名字是"), ("ja", "私の名前は"), ("ko", "제 이름은"),
            ("ar", "اسمي"), ("hi", "मेरा नाम है"), ("th", "ฉันชื่อ"),
        ],
    },
    PhraseEntry {
        canonical: "what is your name",
        translations: &[
            ("es", "cómo te llamas"), ("fr", "comment vous appelez-vous"),
            ("de", "wie heißt du"), ("it", "come ti chiami"),
            ("pt", "qual é o seu nome"), ("ru", "как вас зовут"),
            ("zh-cn", "你叫什么名字"), ("ja", "お名前は何ですか"), ("ko", "이름이 뭐예요"),
            ("ar", "ما هو اسمك"), ("hi", "आपका नाम क्या है"), ("th", "คุณชื่ออะไร"),
        ],
    },
    PhraseEntry {
        canonical: "nice to meet you",
        translations: &[
            ("es", "encantado de conocerte"), ("fr", "enchanté de vous rencontrer"),
            ("de", "schön dich kennenzulernen"), ("it", "piacere di conoscerti"),
            ("pt", "prazer em conhecê-lo"), ("ru", "приятно познакомиться"),
            ("zh-cn", "很高兴认识你"), ("ja", "はじめまして"), ("ko", "만나서 반갑습니다"),
            ("ar", "تشرفت بمعرفتك"), ("hi", "आपसे मिलकर अच्छा लगा"), ("th", "ยินดีที่ได้รู้จัก"),
        ],
    },
    PhraseEntry {
        canonical: "how much is this",
        translations: &[
            ("es", "cuánto cuesta esto"), ("fr", "combien ça coûte"),
            ("de", "wie viel kostet das"), ("it", "quanto costa questo"),
            ("pt", "quanto custa isso"), ("ru", "сколько это стоит"),
            ("zh-cn", "这个多少钱"), ("ja", "これはいくらですか"), ("ko", "이것은 얼마입니까"),
            ("ar", "كم سعر هذا"), ("hi", "यह कितने का है"), ("th", "อันนี้ราคาเท่าไหร่"),
        ],
    },
    PhraseEntry {
        canonical: "where is",
        translations: &[
            ("es", "dónde está"), ("fr", "où est"), ("de", "wo ist"), ("it", "dov'è"),
            ("pt", "onde está"), ("ru", "где находится"), ("zh-cn", "在哪里"),
            ("ja", "どこですか"), ("ko", "어디에 있습니까"), ("ar", "أين"),
            ("hi", "कहां है"), ("th", "อยู่ที่ไหน"),
        ],
    },
    PhraseEntry {
        canonical: "i don't understand",
        translations: &[
            ("es", "no entiendo"), ("fr", "je ne comprends pas"),
            ("de", "ich verstehe nicht"), ("it", "non capisco"), ("pt", "não entendo"),
            ("ru", "я не понимаю"), ("zh-cn", "我不明白"), ("ja", "分かりません"),
            ("ko", "이해가 안 됩니다"), ("ar", "أنا لا أفهم"),
            ("hi", "मैं समझ नहीं पा रहा हूं"), ("th", "ฉันไม่เข้าใจ"),
        ],
    },
    PhraseEntry {
        canonical: "can you help me",
        translations: &[
            ("es", "puedes ayudarme"), ("fr", "pouvez-vous m'aider"),
            ("de", "kannst du mir helfen"), ("it", "puoi aiutarmi"),
            ("pt", "pode me ajudar"), ("ru", "можете мне помочь"),
            ("zh-cn", "你能帮我吗"), ("ja", "手伝ってもらえますか"),
            ("ko", "도와주실 수 있나요"), ("ar", "هل يمكنك مساعدتي"),
            ("hi", "क्या आप मेरी मदद कर सकते हैं"), ("th", "คุณช่วยฉันได้ไหม"),
        ],
    },
    // Longer-tail entries with partial coverage
    PhraseEntry {
        canonical: "did you go",
        translations: &[("hi", "क्या आप गए थे")],
    },
    PhraseEntry {
        canonical: "yesterday",
        translations: &[("hi", "कल")],
    },
    PhraseEntry {
        canonical: "english",
        translations: &[("hi", "अंग्रेजी")],
    },
    PhraseEntry {
        canonical: "coaching",
        translations: &[("hi", "कोचिंग")],
    },
    PhraseEntry {
        canonical: "your",
        translations: &[("hi", "आपका")],
    },
    PhraseEntry {
        canonical: "to",
        translations: &[("hi", "को")],
    },
    PhraseEntry {
        canonical: "for",
        translations: &[("hi", "के लिए")],
    },
    PhraseEntry {
        canonical: "me",
        translations: &[("hi", "मुझे")],
    },
    PhraseEntry {
        canonical: "tonight",
        translations: &[("hi", "आज रात")],
    },
    PhraseEntry {
        canonical: "why",
        translations: &[("hi", "क्यों")],
    },
    PhraseEntry {
        canonical: "were",
        translations: &[("hi", "थे")],
    },
    PhraseEntry {
        canonical: "not",
        translations: &[("hi", "नहीं")],
    },
    PhraseEntry {
        canonical: "available",
        translations: &[("hi", "उपलब्ध")],
    },
    PhraseEntry {
        canonical: "why were you not available for me tonight",
        translations: &[("hi", "आप आज रात मेरे लिए उपलब्ध क्यों नहीं थे")],
    },
    PhraseEntry {
        canonical: "did you go to your english coaching yesterday",
        translations: &[("hi", "क्या आप कल अपनी अंग्रेजी कोचिंग में गए थे")],
    },
    PhraseEntry {
        canonical: "hello how are you why were you not available for me tonight",
        translations: &[("hi", "नमस्ते आप कैसे हैं आप आज रात मेरे लिए उपलब्ध क्यों नहीं थे")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        assert_eq!(translation("hello", "es"), Some("hola"));
        assert_eq!(translation("hello", "fr"), Some("bonjour"));
        assert_eq!(translation("thank you", "de"), Some("danke"));
    }

    #[test]
    fn test_unknown_phrase() {
        assert_eq!(translation("quantum entanglement", "es"), None);
    }

    #[test]
    fn test_missing_language_entry() {
        // Long-tail rows only cover Hindi
        assert_eq!(translation("yesterday", "hi"), Some("कल"));
        assert_eq!(translation("yesterday", "es"), None);
    }

    #[test]
    fn test_canonical_keys_are_lowercase() {
        for entry in PHRASES {
            assert_eq!(entry.canonical, entry.canonical.to_lowercase());
        }
    }

    #[test]
    fn test_canonical_keys_are_unique() {
        let mut keys: Vec<&str> = PHRASES.iter().map(|e| e.canonical).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), PHRASES.len());
    }

    #[test]
    fn test_entry_translation_accessor() {
        let entry = PHRASES
            .iter()
            .find(|e| e.canonical == "goodbye")
            .expect("goodbye is registered");
        assert_eq!(entry.translation("ru"), Some("до свидания"));
        assert_eq!(entry.translation("xx"), None);
    }
}
