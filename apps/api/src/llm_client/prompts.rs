// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Spelling and register rule appended to every content prompt.
pub const UK_ENGLISH_INSTRUCTION: &str = "\
    Write in British English throughout: optimise, colour, centre, programme, \
    behaviour, analyse, modelling. Never use American spellings.";

/// House style for generated HTML fragments.
pub const HTML_STYLE_INSTRUCTION: &str = "\
    Content fields are HTML fragments. Wrap every paragraph in <p></p>. \
    Use <b></b> for emphasis and <a href=\"...\"></a> for links. \
    Do NOT add inline styles, classes, headings or <html>/<body> tags.";
