use std::io::{self, Write};

const PROMPT_BANNER: &str = "++++++ Prompt ++++++";
const RESPONSE_BANNER: &str = "++++++ Generated response ++++++";

fn write_blank_lines<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out)
}

/// Prompt section, followed by the response banner so the generated text
/// can be written once the request completes.
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write_blank_lines(out)?;
    writeln!(out, "{}", PROMPT_BANNER)?;
    writeln!(out, "{}", prompt)?;
    write_blank_lines(out)?;
    writeln!(out, "{}", RESPONSE_BANNER)?;
    out.flush()
}

pub fn write_response<W: Write>(out: &mut W, response: &str) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    write_blank_lines(out)?;
    out.flush()
}
