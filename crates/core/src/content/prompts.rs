//! System prompts and user-prompt composition

use linkedgpt_domain::{ContentRequest, Platform};

const LINKEDIN_PROMPT: &str = "You are an expert LinkedIn ghostwriter. Write a professional, \
engaging post with a strong opening line, short paragraphs and a closing question that invites \
discussion. Do not wrap the post in quotes.";

const TWITTER_PROMPT: &str = "You are a social media copywriter. Write a single punchy tweet of \
at most 280 characters. Do not wrap the tweet in quotes.";

const FACEBOOK_PROMPT: &str = "You are a friendly community manager. Write a warm, \
conversational Facebook post that encourages comments. Do not wrap the post in quotes.";

const GENERIC_PROMPT: &str = "You are a helpful assistant that writes clear, concise text.";

/// System prompt for `platform`, or the generic assistant prompt.
pub fn system_prompt(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::LinkedIn) => LINKEDIN_PROMPT,
        Some(Platform::Twitter) => TWITTER_PROMPT,
        Some(Platform::Facebook) => FACEBOOK_PROMPT,
        None => GENERIC_PROMPT,
    }
}

/// Normalise a comma-separated tag list: `"a, #b,,c"` becomes `"#a #b #c"`.
pub fn format_hashtags(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| if tag.starts_with('#') { tag.to_string() } else { format!("#{tag}") })
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`format_hashtags`] over already-split tags.
pub fn format_hashtag_list(tags: &[String]) -> String {
    format_hashtags(&tags.join(","))
}

/// User prompt with the optional tone and hashtag instructions appended.
pub fn compose_prompt(request: &ContentRequest) -> String {
    let mut prompt = request.prompt.clone();

    if let Some(tone) = request.tone.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str("\nTone: ");
        prompt.push_str(tone);
    }

    let tags = format_hashtag_list(&request.hashtags);
    if !tags.is_empty() {
        prompt.push_str("\nInclude these hashtags: ");
        prompt.push_str(&tags);
    }

    prompt
}

/// Text that actually gets published: content, blank line, tags.
pub fn with_hashtags(content: &str, tags: &[String]) -> String {
    let tags = format_hashtag_list(tags);
    if tags.is_empty() {
        content.to_string()
    } else {
        format!("{content}\n\n{tags}")
    }
}
