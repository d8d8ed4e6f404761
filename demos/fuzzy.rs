use bch4fe::sketch::{key_to_hex, parse_bit_string, HelperData};
use bch4fe::{BchParams, FuzzyExtractor};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let params = BchParams::default();
    let fe = FuzzyExtractor::new(params).expect("default params are valid");

    // a 256-bit enrolment template
    let enrol: String = (0..256).map(|i| if (i * 7 + i / 3) % 5 < 2 { '1' } else { '0' }).collect();
    let w = parse_bit_string(&enrol).expect("template is a bit string");
    let (helper, key) = fe.generate(&w);
    let helper_text = helper.to_hex();

    // later reading differs in a handful of bits
    let noisy: String = enrol
        .chars()
        .enumerate()
        .map(|(i, c)| if i % 37 == 5 { if c == '0' { '1' } else { '0' } } else { c })
        .collect();
    let w_noisy = parse_bit_string(&noisy).expect("reading is a bit string");

    let parsed = HelperData::from_hex(&helper_text, params.t).expect("helper data round-trips");
    let key_again = fe.reproduce(&w_noisy, &parsed);

    println!("=== Fuzzy extractor demo ===");
    println!("t            : {}", params.t);
    println!("Helper data  : {helper_text}");
    println!("Enrolled key : {}", key_to_hex(&key));
    println!("Reproduced   : {}", key_to_hex(&key_again));
    println!("Match        : {}", key == key_again);
}
