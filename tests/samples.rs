use elit_tokenizer::{tokenize, tokenize_batch, EnglishTokenizer, Tokenizer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Sample {
    input: String,
    tokens: Vec<String>,
}

fn samples() -> Vec<Sample> {
    serde_json::from_str(include_str!("fixtures/samples.json")).expect("fixture should parse")
}

#[test]
fn samples_tokenize_as_expected() {
    for sample in samples() {
        assert_eq!(tokenize(&sample.input), sample.tokens, "input: {:?}", sample.input);
    }
}

#[test]
fn no_empty_tokens() {
    for sample in samples() {
        assert!(tokenize(&sample.input).iter().all(|t| !t.is_empty()), "input: {:?}", sample.input);
    }
}

#[test]
fn retokenizing_joined_tokens_is_stable() {
    for sample in samples() {
        let tokens = tokenize(&sample.input);
        assert_eq!(tokenize(&tokens.join(" ")), tokens, "input: {:?}", sample.input);
    }
}

#[test]
fn tokens_rebuild_the_input_without_delimiters() {
    for sample in samples() {
        let joined: String = tokenize(&sample.input).concat();
        let stripped: String = sample.input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, stripped, "input: {:?}", sample.input);
    }
}

#[test]
fn offsets_point_back_into_the_input() {
    let tokenizer = EnglishTokenizer::new().unwrap();
    for sample in samples() {
        let chars: Vec<char> = sample.input.chars().collect();
        let text = tokenizer.tokenize_with_offsets(&sample.input, 0);
        assert_eq!(text.tokens.len(), text.offsets.len());
        let mut last_end = 0;
        for (token, &(begin, end)) in text.tokens.iter().zip(&text.offsets) {
            assert!(begin >= last_end && begin < end, "input: {:?}", sample.input);
            let slice: String = chars[begin..end].iter().collect();
            assert_eq!(&slice, token);
            last_end = end;
        }
    }
}

#[test]
fn batch_matches_single_calls() {
    let inputs: Vec<String> = samples().into_iter().map(|s| s.input).collect();
    let tokenizer = EnglishTokenizer::new().unwrap();
    let batch = tokenize_batch(&tokenizer, &inputs);
    for (input, tokens) in inputs.iter().zip(batch) {
        assert_eq!(tokens, tokenize(input));
    }
}

const TRICKY: &[char] = &[
    ':', ',', 'D', 'p', '3', '@', '#', '&', '.', 'a', 'b', 'o', 'x', '0', '1', ' ',
];

#[test]
fn generated_inputs_keep_every_guarantee() {
    let mut rng = StdRng::seed_from_u64(2018);
    for _ in 0..20_000 {
        let len = rng.random_range(1..15);
        let input: String = (0..len)
            .map(|_| TRICKY[rng.random_range(0..TRICKY.len())])
            .collect();
        let tokens = tokenize(&input);

        assert!(tokens.iter().all(|t| !t.is_empty()), "input: {:?}", input);
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(tokens.concat(), stripped, "input: {:?}", input);
        assert_eq!(tokenize(&tokens.join(" ")), tokens, "input: {:?}", input);
    }
}
