#![allow(missing_docs)]

use std::sync::{Arc, LazyLock};

use divan::{Bencher, black_box, counter::BytesCount};
use mixpiece::{
    TokenEncoder,
    Tokenizer,
    TokenizerOptions,
    Vocabulary,
    segmentation::{DictionarySegmentor, RegexSegmentor, TextSegmentor},
};

fn main() {
    divan::main();
}

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jump", "s", "over", "lazy", "dog", "北京", "天安门", "我",
    "爱", "清华", "大学", "中文", "分词", "，", "。", ".", ",", "▂", "▃",
];

fn mixed_text() -> String {
    let paragraph = "The quick brown fox jumps over the lazy dog.\n\
        我爱北京天安门，清华大学的中文分词。\n\
        Ｆｕｌｌ－ｗｉｄｔｈ ｔｅｘｔ， mixed with 中文 and numbers 2024.\n";
    paragraph.repeat(100)
}

fn build_tokenizer(segmentor: Arc<dyn TextSegmentor>) -> Tokenizer<u32> {
    let tokens = ["<unk>", "<s>", "<eod>"]
        .iter()
        .chain(WORDS)
        .map(|s| s.to_string())
        .chain((0..190).map(|n| format!("<s_{n}>")));
    let vocab = Vocabulary::from_tokens(tokens).unwrap();
    Tokenizer::new(Arc::new(vocab), segmentor).unwrap()
}

static TEXT: LazyLock<String> = LazyLock::new(mixed_text);

static REGEX_TOKENIZER: LazyLock<Tokenizer<u32>> =
    LazyLock::new(|| build_tokenizer(Arc::new(RegexSegmentor::default())));

static DICTIONARY_TOKENIZER: LazyLock<Tokenizer<u32>> = LazyLock::new(|| {
    let segmentor = DictionarySegmentor::from_words([
        ("北京", 200),
        ("天安门", 50),
        ("清华大学", 80),
        ("大学", 60),
        ("中文", 90),
        ("分词", 40),
    ])
    .unwrap();
    build_tokenizer(Arc::new(segmentor))
});

mod encode {
    use super::*;

    #[divan::bench]
    fn regex(bencher: Bencher) {
        let text = TEXT.as_str();
        bencher
            .counter(BytesCount::of_str(text))
            .bench(|| REGEX_TOKENIZER.encode(black_box(text)));
    }

    #[divan::bench]
    fn dictionary(bencher: Bencher) {
        let text = TEXT.as_str();
        bencher
            .counter(BytesCount::of_str(text))
            .bench(|| DICTIONARY_TOKENIZER.encode(black_box(text)));
    }

    #[divan::bench]
    fn parallel_batch(bencher: Bencher) {
        let encoder = TokenizerOptions::default()
            .with_parallel(true)
            .wrap_encoder(REGEX_TOKENIZER.clone());
        let batch: Vec<&str> = TEXT.lines().collect();

        bencher
            .counter(BytesCount::of_str(TEXT.as_str()))
            .bench(|| encoder.encode_batch(black_box(&batch)));
    }
}

mod decode {
    use super::*;

    #[divan::bench]
    fn regex(bencher: Bencher) {
        let ids = REGEX_TOKENIZER.encode(TEXT.as_str());
        bencher.bench(|| REGEX_TOKENIZER.decode(black_box(&ids)).unwrap());
    }
}
