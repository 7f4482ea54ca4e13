// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted `code`\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    let mut content = String::new();
    for level in 1..=depth {
        content.push_str(&format!("{} Level {} with *emphasis*\n", ">".repeat(level), level));
    }
    content
}

#[allow(dead_code)]
pub fn generate_directive_document(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!(
            "# Section {section}\n\n@:note\nPress @:kbd{{Ctrl}} to continue.\n\n- item\n@:@\n\n@:bogus\nbroken\n\n"
        ));
    }
    content
}
