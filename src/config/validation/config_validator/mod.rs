mod validate;
mod style_options;
mod parse_color;

pub struct ConfigValidator;
