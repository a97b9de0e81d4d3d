mod code_block;
mod copy_button;
mod section;

pub use code_block::CodeBlock;
pub use copy_button::CopyButton;
pub use section::Section;
