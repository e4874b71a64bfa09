/// Token representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,      // Token text, original case
    pub position: u32,     // Index in the token sequence
    pub offset: usize,     // Byte offset in original text
    pub length: usize,     // Token length in bytes
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        let length = text.len();
        Token {
            text,
            position,
            offset,
            length,
        }
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}
