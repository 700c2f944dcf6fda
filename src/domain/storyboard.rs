//! Three-scene storyboard composition.

use std::fmt;

/// One scene of a storyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    title: &'static str,
    text: String,
}

impl Scene {
    pub fn title(&self) -> &str {
        self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The three-scene narrative derived from a resolved blurb.
///
/// Regenerated whenever the underlying text changes; never reused across
/// edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storyboard {
    scenes: [Scene; 3],
}

impl Storyboard {
    /// Compose a storyboard from a fully-resolved blurb.
    ///
    /// Sentences are the period-separated segments of the text. The first
    /// becomes the hook, the second the core insight, and everything after
    /// the second period is re-joined with single spaces as the
    /// implications. Fewer than three sentences degrades to empty scenes
    /// rather than failing.
    pub fn compose(resolved: &str) -> Self {
        let parts: Vec<&str> = resolved.split('.').collect();

        let hook = sentence(parts.first().copied());
        let core_insight = sentence(parts.get(1).copied());

        let rest: Vec<&str> =
            parts.iter().skip(2).map(|part| part.trim()).filter(|part| !part.is_empty()).collect();
        let implications =
            if rest.is_empty() { String::new() } else { format!("{}.", rest.join(" ")) };

        Storyboard {
            scenes: [
                Scene { title: "Hook", text: hook },
                Scene { title: "Core Insight", text: core_insight },
                Scene { title: "Implications", text: implications },
            ],
        }
    }

    pub fn hook(&self) -> &Scene {
        &self.scenes[0]
    }

    pub fn core_insight(&self) -> &Scene {
        &self.scenes[1]
    }

    pub fn implications(&self) -> &Scene {
        &self.scenes[2]
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }
}

fn sentence(part: Option<&str>) -> String {
    match part.map(str::trim) {
        Some(text) if !text.is_empty() => format!("{}.", text),
        _ => String::new(),
    }
}

impl fmt::Display for Storyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, scene) in self.scenes.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "### Scene {}: {}", index + 1, scene.title)?;
            writeln!(f, "{}", scene.text)?;
        }
        Ok(())
    }
}
