//! Script character sets and placeholder-text fabrication
//!
//! When the phrase table has nothing to offer, the pseudo-translation
//! pipeline still has to produce *something* in the target writing system.
//! [`fabricate`] replaces each word of the input with a same-length string
//! of random characters drawn from the target script, preserving token
//! count, per-token length and edge punctuation. The output has no semantic
//! relationship to the input; it is a visual placeholder, not a translation.

use rand::Rng;

/// Character inventory for one target writing system
pub struct ScriptCharset {
    pub code: &'static str,
    pub chars: &'static [char],
}

/// Fallback charset key
pub const DEFAULT_CHARSET: &str = "default";

/// Target codes whose writing systems omit inter-word spaces
const SPACELESS_TARGETS: &[&str] = &["zh-cn", "ja"];

/// Punctuation stripped from word edges and reattached after fabrication
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

pub const CHARSETS: &[ScriptCharset] = &[
    // Hindi (Devanagari)
    ScriptCharset {
        code: "hi",
        chars: &[
            'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ए', 'ऐ', 'ओ', 'औ', 'क', 'ख', 'ग', 'घ', 'ङ',
            'च', 'छ', 'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ', 'द', 'ध', 'न',
            'प', 'फ', 'ब', 'भ', 'म', 'य', 'र', 'ल', 'व', 'श', 'ष', 'स', 'ह', 'ा', 'ि',
            'ी', 'ु', 'ू', 'े', 'ै', 'ो', 'ौ', '्', 'ं', 'ः',
        ],
    },
    // Arabic
    ScriptCharset {
        code: "ar",
        chars: &[
            'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض',
            'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي', 'ء', 'ة',
            'ى', 'َ', 'ُ', 'ِ', 'ّ', 'ْ', 'ٌ', 'ٍ', 'ً', 'ـ',
        ],
    },
    // Russian (Cyrillic)
    ScriptCharset {
        code: "ru",
        chars: &[
            'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н',
            'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь',
            'э', 'ю', 'я',
        ],
    },
    // Japanese (Hiragana and Katakana)
    ScriptCharset {
        code: "ja",
        chars: &[
            'あ', 'い', 'う', 'え', 'お', 'か', 'き', 'く', 'け', 'こ', 'さ', 'し', 'す',
            'せ', 'そ', 'た', 'ち', 'つ', 'て', 'と', 'な', 'に', 'ぬ', 'ね', 'の', 'は',
            'ひ', 'ふ', 'へ', 'ほ', 'ま', 'み', 'む', 'め', 'も', 'や', 'ゆ', 'よ', 'ら',
            'り', 'る', 'れ', 'ろ', 'わ', 'を', 'ん', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ',
            'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
        ],
    },
    // Korean (Hangul)
    ScriptCharset {
        code: "ko",
        chars: &[
            '가', '나', '다', '라', '마', '바', '사', '아', '자', '차', '카', '타', '파',
            '하', '개', '내', '대', '래', '매', '배', '새', '애', '재', '채', '캐', '태',
            '패', '해', '고', '노', '도', '로', '모', '보', '소', '오', '조', '초', '코',
            '토', '포', '호',
        ],
    },
    // Thai
    ScriptCharset {
        code: "th",
        chars: &[
            'ก', 'ข', 'ค', 'ฆ', 'ง', 'จ', 'ฉ', 'ช', 'ซ', 'ฌ', 'ญ', 'ฎ', 'ฏ', 'ฐ', 'ฑ',
            'ฒ', 'ณ', 'ด', 'ต', 'ถ', 'ท', 'ธ', 'น', 'บ', 'ป', 'ผ', 'ฝ', 'พ', 'ฟ', 'ภ',
            'ม', 'ย', 'ร', 'ล', 'ว', 'ศ', 'ษ', 'ส', 'ห', 'ฬ', 'อ', 'ฮ', '่', '้', '๊',
            '๋', 'ั', 'ำ', 'ิ', 'ี', 'ึ', 'ื', 'ุ', 'ู',
        ],
    },
    // Chinese (common Han)
    ScriptCharset {
        code: "zh-cn",
        chars: &[
            '一', '丁', '七', '三', '上', '下', '不', '世', '东', '中', '为', '么', '也',
            '了', '事', '于', '些', '交', '产', '京', '人', '什', '仅', '从', '他', '以',
            '们', '件', '会', '体', '你', '使', '信', '候', '先', '入', '全', '公', '共',
            '关', '其', '内', '写', '几', '出', '分', '切', '到', '利', '十', '千', '午',
            '单', '南', '即', '却', '原', '去', '又', '及', '发', '只', '可', '各', '合',
            '同', '后', '向', '否', '听', '命', '和', '四', '因', '国', '图', '在', '地',
        ],
    },
    // Latin with diacritics, used for every other target
    LATIN_DEFAULT,
];

/// Fallback charset: Latin with diacritics
const LATIN_DEFAULT: ScriptCharset = ScriptCharset {
    code: DEFAULT_CHARSET,
    chars: &[
        'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
        'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'á', 'à', 'â', 'ä',
        'ã', 'å', 'æ', 'ç', 'é', 'è', 'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò',
        'ô', 'ö', 'õ', 'ø', 'œ', 'ú', 'ù', 'û', 'ü', 'ý', 'ÿ',
    ],
};

/// Charset for a target code, falling back to the Latin default
pub fn charset_for(target: &str) -> &'static ScriptCharset {
    CHARSETS
        .iter()
        .find(|cs| cs.code == target)
        .unwrap_or(&LATIN_DEFAULT)
}

/// Fabricate placeholder text in the target writing system
///
/// Each space-delimited word is replaced by a random string of the same
/// character length drawn from the target charset. Punctuation at word
/// edges stays on the side it was found; tokens that are nothing but
/// punctuation (or empty, from consecutive spaces) pass through unchanged.
/// For spaceless targets (`zh-cn`, `ja`) the joined result loses its
/// spaces. Unknown targets degrade to the default charset; the function
/// cannot fail.
///
/// Two calls with the same input are not required to agree: this is not a
/// cipher, and no round-trip is possible.
pub fn fabricate<R: Rng + ?Sized>(text: &str, target: &str, rng: &mut R) -> String {
    let charset = charset_for(target);

    let words: Vec<String> = text
        .split(' ')
        .map(|word| fabricate_word(word, charset, rng))
        .collect();

    let mut result = words.join(" ");
    if SPACELESS_TARGETS.contains(&target) {
        result.retain(|c| c != ' ');
    }
    result
}

fn fabricate_word<R: Rng + ?Sized>(word: &str, charset: &ScriptCharset, rng: &mut R) -> String {
    let stripped_start = word.trim_start_matches(EDGE_PUNCTUATION);
    let core = stripped_start.trim_end_matches(EDGE_PUNCTUATION);

    if core.is_empty() {
        return word.to_string();
    }

    let prefix = &word[..word.len() - stripped_start.len()];
    let suffix = &stripped_start[core.len()..];

    let mut out = String::with_capacity(word.len());
    out.push_str(prefix);
    for _ in core.chars() {
        out.push(charset.chars[rng.gen_range(0..charset.chars.len())]);
    }
    out.push_str(suffix);
    out
}
