/// Fake profile sampling.
///
/// Every draw goes through the caller-supplied `Rng`, so a seeded generator
/// reproduces the full data set (minus the wall-clock prefix of each ID).
use rand::Rng;
use serde::Serialize;

use crate::ulid;

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson",
];

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth",
];

pub const PREFECTURES: &[&str] = &[
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県", "茨城県", "栃木県",
    "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県", "新潟県", "富山県", "石川県", "福井県",
    "山梨県", "長野県", "岐阜県", "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府",
    "兵庫県", "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県", "徳島県",
    "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県", "熊本県", "大分県", "宮崎県",
    "鹿児島県", "沖縄県",
];

pub const GENDERS: &[&str] = &["男", "女"];

pub const HOBBIES: &[&str] = &[
    "reading", "traveling", "cooking", "sports", "music", "gaming", "art",
];
pub const STYLES: &[&str] = &["casual", "formal", "sporty", "elegant", "vintage"];
pub const MUSIC: &[&str] = &["rock", "pop", "jazz", "classical", "hiphop", "electronic"];
pub const BOOKS: &[&str] = &[
    "1984",
    "Pride and Prejudice",
    "To Kill a Mockingbird",
    "The Great Gatsby",
    "Moby Dick",
];

/// Optional attributes with their independent inclusion probabilities.
/// Serialization order in the blob follows this table.
pub const ATTRIBUTES: &[(&str, f64, &[&str])] = &[
    ("hobby", 0.7, HOBBIES),
    ("style", 0.5, STYLES),
    ("favorite_music", 0.6, MUSIC),
    ("favorite_book", 0.4, BOOKS),
];

/// One output row. Serde renames carry the CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "姓")]
    pub last_name: String,
    #[serde(rename = "名")]
    pub first_name: String,
    #[serde(rename = "年齢")]
    pub age: u8,
    #[serde(rename = "性別")]
    pub gender: String,
    #[serde(rename = "住所")]
    pub address: String,
    #[serde(rename = "メールアドレス")]
    pub email: String,
    #[serde(rename = "その他")]
    pub extras: String,
}

fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Sample the sparse attribute set and serialize it as a compact JSON object.
/// Each attribute is an independent Bernoulli trial; an empty draw yields `{}`.
fn sample_extras(rng: &mut impl Rng) -> String {
    let mut extras = serde_json::Map::new();
    for &(key, probability, pool) in ATTRIBUTES {
        if rng.random_bool(probability) {
            let value = pick(rng, pool);
            extras.insert(key.to_string(), serde_json::Value::from(value));
        }
    }
    serde_json::Value::Object(extras).to_string()
}

/// Sample one complete record.
pub fn sample(rng: &mut impl Rng) -> Record {
    let id = ulid::generate(rng);
    let last = pick(rng, LAST_NAMES);
    let first = pick(rng, FIRST_NAMES);
    let email = format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        rng.random_range(1..=1000)
    );
    Record {
        id,
        last_name: last.to_string(),
        first_name: first.to_string(),
        age: rng.random_range(0..=60),
        gender: pick(rng, GENDERS).to_string(),
        address: pick(rng, PREFECTURES).to_string(),
        email,
        extras: sample_extras(rng),
    }
}

/// Sample `n` records in insertion order.
pub fn sample_many(rng: &mut impl Rng, n: usize) -> Vec<Record> {
    (0..n).map(|_| sample(rng)).collect()
}
