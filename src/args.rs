use clap::Parser;

use crate::utils::default_words;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"
Exemplar asks the Llama chat completions API for an English example sentence
that uses a handful of vocabulary words, and prints the prompt together with
the generated sentence.

The API key is read from the LLAMA_API_KEY environment variable.
"###
)]
pub struct Args {
    /// Vocabulary words to build the sentence from.
    #[arg(value_name = "WORDS", default_values_t = default_words())]
    pub words: Vec<String>,
}
