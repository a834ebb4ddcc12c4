pub mod chat_completions;

#[cfg(test)]
mod test_server;

pub use chat_completions::get_generated_response;
