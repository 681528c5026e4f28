// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with *some* **content** that\nwraps onto a second line.\n\n- Bullet point\n- Another item\n\n1. First step\n2. Second step\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_paragraphs(paragraphs: usize) -> String {
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!(
            "Paragraph {i} has several sentences of plain text. It exercises the text mode of the scanner.\nIt also spans a second line.\n\n"
        ));
    }
    content
}
