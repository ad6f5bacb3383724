//! Rule-based response engine.
//!
//! Classifies user input against an ordered table of keyword rule groups
//! and composes a canned reply from the profile knowledge base. Pure and
//! total: the fallback group guarantees every input gets a reply.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use folio_action::Action;
use folio_core::profile::KnowledgeBase;

use crate::types::Message;

// =============================================================================
// Trigger keywords
// =============================================================================

// Group order is the dispatch priority: an input matching several groups gets
// the reply of the first one listed here. Employer names and aliases from the
// profile are appended to the experience triggers at engine construction.

const EXPERIENCE_TRIGGERS: &[&str] = &["experience", "work", "worked", "job", "role", "employer"];

const EDUCATION_TRIGGERS: &[&str] = &[
    "education",
    "study",
    "studied",
    "degree",
    "university",
    "certification",
    "certifications",
];

const AVAILABILITY_TRIGGERS: &[&str] = &[
    "available",
    "availability",
    "free",
    "when",
    "schedule",
    "hire",
    "hiring",
];

const SERVICE_TRIGGERS: &[&str] = &[
    "service",
    "services",
    "skill",
    "skills",
    "offer",
    "offering",
    "do",
    "can",
    "help",
];

const CONTACT_TRIGGERS: &[&str] = &["contact", "reach", "email", "phone", "call"];

/// Compile a keyword into a case-insensitive pattern.
///
/// Word boundaries are added only next to word characters, so single
/// keywords match whole words (`do` does not match inside `random`) while
/// multi-word organization names still match as phrases.
fn keyword_pattern(keyword: &str) -> Regex {
    let escaped = regex::escape(&keyword.to_lowercase());
    let mut pattern = String::from("(?i)");
    if keyword.starts_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&escaped);
    if keyword.ends_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    Regex::new(&pattern).expect("Invalid trigger keyword")
}

fn compile_triggers(keywords: &[&str]) -> Vec<Regex> {
    keywords.iter().map(|k| keyword_pattern(k)).collect()
}

// =============================================================================
// Topic & Reply
// =============================================================================

/// The rule group a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Experience,
    Education,
    Availability,
    Services,
    Contact,
    Fallback,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Experience => write!(f, "experience"),
            Topic::Education => write!(f, "education"),
            Topic::Availability => write!(f, "availability"),
            Topic::Services => write!(f, "services"),
            Topic::Contact => write!(f, "contact"),
            Topic::Fallback => write!(f, "fallback"),
        }
    }
}

/// The engine's output: reply text plus follow-up actions.
///
/// Fully comparable so that determinism is directly testable; the session
/// wraps it into a transcript [`Message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub topic: Topic,
    pub content: String,
    pub actions: Vec<Action>,
}

impl Reply {
    /// Wrap the reply into an assistant transcript message.
    pub fn into_message(self) -> Message {
        Message::assistant(self.content, self.actions)
    }
}

// =============================================================================
// ResponseEngine
// =============================================================================

struct RuleGroup {
    topic: Topic,
    patterns: Vec<Regex>,
}

/// Keyword-rule dispatcher over the profile knowledge base.
///
/// The rule table is compiled once at construction; `respond` is pure and
/// deterministic. All reply text is interpolated from the knowledge base at
/// call time so content updates never touch dispatch logic.
pub struct ResponseEngine {
    kb: Arc<KnowledgeBase>,
    rules: Vec<RuleGroup>,
    /// (experience index, pattern) per organization name and alias.
    employers: Vec<(usize, Regex)>,
}

impl ResponseEngine {
    /// Build the rule table for the given profile.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        let employers: Vec<(usize, Regex)> = kb
            .experience
            .iter()
            .enumerate()
            .flat_map(|(i, entry)| {
                std::iter::once(&entry.organization)
                    .chain(entry.aliases.iter())
                    .map(move |keyword| (i, keyword_pattern(keyword)))
            })
            .collect();

        let mut experience_patterns = compile_triggers(EXPERIENCE_TRIGGERS);
        experience_patterns.extend(employers.iter().map(|(_, re)| re.clone()));

        let rules = vec![
            RuleGroup {
                topic: Topic::Experience,
                patterns: experience_patterns,
            },
            RuleGroup {
                topic: Topic::Education,
                patterns: compile_triggers(EDUCATION_TRIGGERS),
            },
            RuleGroup {
                topic: Topic::Availability,
                patterns: compile_triggers(AVAILABILITY_TRIGGERS),
            },
            RuleGroup {
                topic: Topic::Services,
                patterns: compile_triggers(SERVICE_TRIGGERS),
            },
            RuleGroup {
                topic: Topic::Contact,
                patterns: compile_triggers(CONTACT_TRIGGERS),
            },
        ];

        Self {
            kb,
            rules,
            employers,
        }
    }

    /// The profile behind this engine.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Classify an input against the rule groups in priority order.
    ///
    /// First match wins; later groups are never consulted. Falls back to
    /// [`Topic::Fallback`] when nothing matches.
    pub fn classify(&self, input: &str) -> Topic {
        for group in &self.rules {
            if group.patterns.iter().any(|re| re.is_match(input)) {
                return group.topic;
            }
        }
        Topic::Fallback
    }

    /// Classify the input and compose the reply for its rule group.
    ///
    /// Expects trimmed, non-empty input (the session controller enforces
    /// this); total for any input regardless.
    pub fn respond(&self, input: &str) -> Reply {
        match self.classify(input) {
            Topic::Experience => self.experience_reply(input),
            Topic::Education => self.education_reply(),
            Topic::Availability => self.availability_reply(),
            Topic::Services => self.services_reply(),
            Topic::Contact => self.contact_reply(),
            Topic::Fallback => self.fallback_reply(),
        }
    }

    /// The greeting that seeds a fresh transcript.
    pub fn greeting(&self) -> String {
        format!(
            "Hi! I'm the assistant for {}'s portfolio. I can help you learn about \
             experience, education, availability, and services. What would you like to know?",
            self.kb.owner
        )
    }

    // -- Rule group replies --

    fn experience_reply(&self, input: &str) -> Reply {
        let actions = vec![Action::navigate_to("experience", "View Full Experience")];

        // Employer-scoped reply when a specific organization was named.
        if let Some(&(i, _)) = self.employers.iter().find(|(_, re)| re.is_match(input)) {
            let entry = &self.kb.experience[i];
            return Reply {
                topic: Topic::Experience,
                content: format!(
                    "At {} ({} – {}), {} worked as a {}. Key achievements include: {}.",
                    entry.organization,
                    entry.period.start,
                    entry.period.end,
                    self.kb.owner,
                    entry.role_title,
                    entry.achievements.join(", ")
                ),
                actions,
            };
        }

        let roles: Vec<String> = self
            .kb
            .experience
            .iter()
            .map(|e| format!("{} at {}", e.role_title, e.organization))
            .collect();
        let highlights: Vec<String> = self
            .kb
            .experience
            .iter()
            .filter_map(|e| e.achievements.first().cloned())
            .collect();

        Reply {
            topic: Topic::Experience,
            content: format!(
                "{} has worked as {}. Highlights include: {}.",
                self.kb.owner,
                roles.join(" and "),
                highlights.join("; ")
            ),
            actions,
        }
    }

    fn education_reply(&self) -> Reply {
        Reply {
            topic: Topic::Education,
            content: format!(
                "{} holds a {}. Certifications: {}.",
                self.kb.owner,
                self.kb.education.degree,
                self.kb.education.certifications.join(", ")
            ),
            actions: vec![Action::navigate_to("education", "View Education Details")],
        }
    }

    fn availability_reply(&self) -> Reply {
        Reply {
            topic: Topic::Availability,
            // The availability statement is replied verbatim.
            content: self.kb.availability.clone(),
            actions: vec![
                Action::schedule("Schedule a Chat", "Project Discussion"),
                Action::contact("Send Message"),
            ],
        }
    }

    fn services_reply(&self) -> Reply {
        Reply {
            topic: Topic::Services,
            content: format!("{} offers: {}.", self.kb.owner, self.kb.services.join(", ")),
            actions: vec![
                Action::contact_with(
                    "Request Quote",
                    serde_json::json!({ "services": self.kb.services }),
                ),
                Action::navigate_to("skills", "View Skills"),
            ],
        }
    }

    fn contact_reply(&self) -> Reply {
        let contact = &self.kb.contact;
        let tel: String = contact.phone.chars().filter(|c| !c.is_whitespace()).collect();
        Reply {
            topic: Topic::Contact,
            content: format!(
                "You can reach {} at {} or {}. Based in {}.",
                self.kb.owner, contact.email, contact.phone, contact.location
            ),
            actions: vec![
                Action::contact("Send Message"),
                Action::open_url(&format!("tel:{}", tel), &format!("Call {}", self.kb.owner)),
            ],
        }
    }

    fn fallback_reply(&self) -> Reply {
        Reply {
            topic: Topic::Fallback,
            content: format!(
                "I can help you learn about {}'s experience, education, availability, \
                 services, and contact details. What would you like to know?",
                self.kb.owner
            ),
            actions: Vec::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
