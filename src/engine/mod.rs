/// Text normalization front end for the vectorizer
pub mod stop_words;
pub mod tokenizer;
