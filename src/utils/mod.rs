const DEFAULT_WORDS: [&str; 3] = ["nonchalant", "reckon", "appalled"];

const PROMPT_PREFIX: &str = "Please create an English example sentence using following words: ";

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn build_prompt(words: &[String]) -> String {
    format!("{}{}", PROMPT_PREFIX, words.join(", "))
}
