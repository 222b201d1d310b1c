//! User messages and analysis instructions for each generation call.

use vprompt_models::{AspectRatio, ShotCount, VideoModel};

/// Instruction sent with `/analyze-image` requests.
pub const IMAGE_ANALYSIS_PROMPT: &str = r#"Analyze this image in detail for use in video generation. Extract:

1. **Colors**: Exact color palette (primary, secondary, accent colors)
2. **Lighting**: Direction, quality (soft/hard), color temperature, shadows
3. **Composition**: Framing, rule of thirds, balance, focal points
4. **Style**: Photographic style, artistic approach, mood, tone
5. **Subjects**: People, products, objects with detailed descriptions
6. **Textures & Materials**: Surface qualities, finishes, patterns
7. **Setting/Environment**: Location, background elements, context
8. **Brand Elements**: Logos, text, design elements (if product image)

Provide a structured analysis that can be used to maintain visual consistency in video generation."#;

const REFERENCE_ANALYSIS_INTRO: &str = r#"Analyze this image in detail for video storyboarding purposes.

Identify:
1. **Product/Subject:** What is the main subject or product?
2. **Visual Style:** Colors, lighting, composition, aesthetic
3. **Setting/Environment:** Location, background, context
4. **Mood/Tone:** Overall feeling and atmosphere
5. **Brand Elements:** Logos, text, brand colors visible
6. **Key Details:** Important features, textures, materials"#;

const REFERENCE_ANALYSIS_SUMMARY: &str = r#"

Provide a concise summary in this format:

**Product/Subject:** [description]
**Visual Style:** [description]
**Setting:** [description]
**Mood/Tone:** [description]
**Brand Elements:** [description]
**Key Details:** [description]
**Storyboard Recommendations:** [2-3 suggestions for video concept based on image]"#;

const CONCEPTS_INSTRUCTIONS: &str = r#"
Please generate THREE distinct storyboard concepts. Each concept should:
1. Have a catchy, descriptive title (3-6 words)
2. Include mood/tone (1-2 sentences describing overall vibe)
3. Provide 6 DETAILED scene descriptions (2-3 sentences each with action, camera work, and mood)

Make each concept unique and creative. Consider different narrative approaches, pacing, and visual styles.

**CRITICAL:** For each scene, write 2-3 full sentences describing:
- What's happening in the scene (action/movement)
- Camera angle, movement, or framing
- Mood, lighting, or emotional tone

Format your response EXACTLY as:

# THREE STORYBOARD CONCEPTS

## Concept 1: [Title]
**Mood/Tone:** [Description]

**6-Scene Storyboard:**

1. **[Scene Title]:** [2-3 sentences describing the scene in detail - include action, camera work, and mood. Be specific about what the viewer sees and how it feels.]

2. **[Scene Title]:** [2-3 sentences describing the scene in detail - include action, camera work, and mood. Be specific about what the viewer sees and how it feels.]

3. **[Scene Title]:** [2-3 sentences describing the scene in detail - include action, camera work, and mood. Be specific about what the viewer sees and how it feels.]

4. **[Scene Title]:** [2-3 sentences describing the scene in detail - include action, camera work, and mood. Be specific about what the viewer sees and how it feels.]

5. **[Scene Title]:** [2-3 sentences describing the scene in detail - include action, camera work, and mood. Be specific about what the viewer sees and how it feels.]

6. **[Scene Title]:** [2-3 sentences describing the scene in detail - include action, camera work, and mood. Be specific about what the viewer sees and how it feels.]

## Concept 2: [Title]
[Same detailed structure]

## Concept 3: [Title]
[Same detailed structure]"#;

/// Build the storyboard request for `/concepts`.
pub fn concepts_user_message(
    creative_direction: &str,
    target_duration: f64,
    image_analysis: Option<&str>,
) -> String {
    let mut message = format!(
        "I need to create a video storyboard with the following details:\n\n\
         **Creative Direction:**\n{}\n\n\
         **Target Duration:** {} seconds\n\
         **Required:** 6 scenes that sum to target duration\n",
        creative_direction, target_duration
    );

    if let Some(analysis) = image_analysis {
        message.push_str(&format!("\n**Reference Image Analysis:**\n{}\n", analysis));
    }

    message.push_str(CONCEPTS_INSTRUCTIONS);
    message
}

/// Inputs for the `/prompt` user message.
#[derive(Debug, Clone)]
pub struct VideoPromptInputs<'a> {
    pub model: VideoModel,
    pub duration_seconds: u32,
    pub aspect_ratio: AspectRatio,
    pub shot_count: Option<&'a ShotCount>,
    pub concept: &'a str,
    pub image_analysis: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

/// Build the final prompt request for `/prompt`.
pub fn video_prompt_user_message(inputs: &VideoPromptInputs<'_>) -> String {
    let model = inputs.model.as_str().to_uppercase();
    let shot_count = inputs
        .shot_count
        .map(ShotCount::describe)
        .unwrap_or_else(|| "Auto (determine optimal)".to_string());

    let mut message = format!(
        "Generate a video prompt for {model} with the following specifications:\n\n\
         **Model**: {model}\n\
         **Duration**: {} seconds\n\
         **Aspect Ratio**: {}\n\
         **Shot Count**: {}\n\n\
         **Video Concept**:\n{}\n",
        inputs.duration_seconds, inputs.aspect_ratio, shot_count, inputs.concept
    );

    if let Some(analysis) = inputs.image_analysis {
        message.push_str(&format!(
            "\n\n**Reference Image Analysis**:\n{}\n\n**Image URL**: {}\n",
            analysis,
            inputs.image_url.unwrap_or("Not provided")
        ));
    }

    message.push_str(
        "\n\nGenerate the complete JSON prompt following the schema exactly. \
         Respond with ONLY the JSON object, no other text.",
    );
    message
}

/// Build the instruction for `/analyze-reference`.
pub fn reference_analysis_prompt(creative_direction: Option<&str>) -> String {
    let mut prompt = REFERENCE_ANALYSIS_INTRO.to_string();

    if let Some(direction) = creative_direction {
        prompt.push_str(&format!(
            "\n\n**Creative Direction from User:**\n{}\n\n\
             Please consider this direction when analyzing the image and suggest how the \
             visual elements could support this creative vision.",
            direction
        ));
    }

    prompt.push_str(REFERENCE_ANALYSIS_SUMMARY);
    prompt
}
