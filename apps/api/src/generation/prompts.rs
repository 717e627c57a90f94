// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for blog post generation. Enforces JSON-only output.
pub const BLOG_SYSTEM: &str = "You are an expert UK content strategist and SEO copywriter \
    writing long-form blog posts for a care-sector consultancy. \
    You MUST respond with valid JSON only: a single JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Blog post prompt template.
/// Replace: {uk_instruction}, {html_instruction}, {topic}, {keyword}, {tone}
pub const BLOG_PROMPT_TEMPLATE: &str = r#"{uk_instruction}

{html_instruction}

Write a blog post.
TOPIC: {topic}
FOCUS KEYWORD: {keyword}
TONE: {tone}

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Post title containing the focus keyword, at most 60 characters",
  "intro": "<p>Opening paragraph that uses the focus keyword early.</p>",
  "heroImageDescription": "One sentence describing a photo for the top of the post",
  "sections": [
    {
      "heading": "Section heading",
      "content": "<p>Two to four paragraphs of HTML.</p>",
      "imageDescription": "One sentence describing a photo for this section"
    }
  ],
  "conclusion": "<p>Closing paragraph with a clear next step.</p>",
  "metaDescription": "Search snippet of 150 to 160 characters containing the focus keyword"
}

HARD RULES:
1. Exactly 4 sections, each with a distinct heading
2. Every section has an imageDescription
3. Use the focus keyword naturally in the title, intro and metaDescription; never keyword-stuff
4. Do NOT include a conclusion heading, a table of contents or calls to action; they are added later"#;
