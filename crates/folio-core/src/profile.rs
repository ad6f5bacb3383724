//! Profile knowledge base.
//!
//! The structured document describing the portfolio owner: work history,
//! education, service offerings, availability, and contact details. Loaded
//! once at startup from a TOML file and never mutated afterwards; the chat
//! engine composes every reply from this structure so that content updates
//! never touch dispatch logic.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FolioError, Result};

/// One role in the owner's work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Organization name as displayed in replies.
    pub organization: String,
    /// Extra trigger keywords for this employer (short names, abbreviations).
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Role title held at the organization.
    pub role_title: String,
    /// Employment period labels.
    pub period: Period,
    /// Achievements in display order.
    pub achievements: Vec<String>,
}

/// Start/end labels of an employment or study period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

/// Degree plus certification list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationSummary {
    /// Full degree description, institution and years included.
    pub degree: String,
    /// Certifications in display order.
    pub certifications: Vec<String>,
}

/// How to reach the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// The static profile document the response engine draws from.
///
/// Invariant: every field is non-empty after a successful [`validate`]
/// (enforced by [`load`]), and the structure is never mutated after
/// construction.
///
/// [`validate`]: KnowledgeBase::validate
/// [`load`]: KnowledgeBase::load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Display name of the portfolio owner.
    pub owner: String,
    /// Work history in display order.
    pub experience: Vec<ExperienceEntry>,
    pub education: EducationSummary,
    /// Service offerings in display order.
    pub services: Vec<String>,
    /// Availability statement, replied verbatim.
    pub availability: String,
    pub contact: ContactDetails,
}

impl KnowledgeBase {
    /// Load and validate a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let kb: KnowledgeBase = toml::from_str(&content)?;
        kb.validate()?;
        info!("Profile loaded from {}", path.display());
        Ok(kb)
    }

    /// Load a profile, falling back to the built-in sample if the file is
    /// missing or invalid.
    pub fn load_or_sample(path: &Path) -> Self {
        match Self::load(path) {
            Ok(kb) => kb,
            Err(e) => {
                warn!(
                    "Failed to load profile from {}: {}. Using built-in sample.",
                    path.display(),
                    e
                );
                Self::sample()
            }
        }
    }

    /// Save the profile to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FolioError::Profile(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Profile saved to {}", path.display());
        Ok(())
    }

    /// Check the non-empty invariant on every field.
    pub fn validate(&self) -> Result<()> {
        fn require(ok: bool, what: &str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(FolioError::Profile(format!("{} must not be empty", what)))
            }
        }

        require(!self.owner.trim().is_empty(), "owner")?;
        require(!self.experience.is_empty(), "experience")?;
        for entry in &self.experience {
            require(!entry.organization.trim().is_empty(), "organization")?;
            require(!entry.role_title.trim().is_empty(), "role_title")?;
            require(!entry.period.start.trim().is_empty(), "period.start")?;
            require(!entry.period.end.trim().is_empty(), "period.end")?;
            require(!entry.achievements.is_empty(), "achievements")?;
            for a in &entry.achievements {
                require(!a.trim().is_empty(), "achievement")?;
            }
        }
        require(!self.education.degree.trim().is_empty(), "education.degree")?;
        require(
            !self.education.certifications.is_empty(),
            "education.certifications",
        )?;
        for c in &self.education.certifications {
            require(!c.trim().is_empty(), "certification")?;
        }
        require(!self.services.is_empty(), "services")?;
        for s in &self.services {
            require(!s.trim().is_empty(), "service")?;
        }
        require(!self.availability.trim().is_empty(), "availability")?;
        require(!self.contact.email.trim().is_empty(), "contact.email")?;
        require(!self.contact.phone.trim().is_empty(), "contact.phone")?;
        require(!self.contact.location.trim().is_empty(), "contact.location")?;
        Ok(())
    }

    /// The built-in sample profile, used by tests and as a last-resort
    /// fallback when no profile file is available.
    pub fn sample() -> Self {
        KnowledgeBase {
            owner: "Amara".to_string(),
            experience: vec![
                ExperienceEntry {
                    organization: "Meridian Dental Clinic".to_string(),
                    aliases: vec!["meridian".to_string()],
                    role_title: "Web Developer".to_string(),
                    period: Period {
                        start: "Apr 2022".to_string(),
                        end: "Jan 2025".to_string(),
                    },
                    achievements: vec![
                        "Integrated and tested REST APIs for the patient portal".to_string(),
                        "Validated JSON and XML data exchange with insurers".to_string(),
                        "Improved system uptime by 40%".to_string(),
                        "Documented security and backup protocols".to_string(),
                    ],
                },
                ExperienceEntry {
                    organization: "Brightline Careers".to_string(),
                    aliases: vec!["brightline".to_string()],
                    role_title: "IT Support".to_string(),
                    period: Period {
                        start: "May 2024".to_string(),
                        end: "Sept 2024".to_string(),
                    },
                    achievements: vec![
                        "Built the organization's branded website from scratch".to_string(),
                        "Set up CI/CD pipelines with GitHub Actions".to_string(),
                        "Held 99.5% uptime through proactive monitoring".to_string(),
                        "Cut deployment time by 80%".to_string(),
                    ],
                },
            ],
            education: EducationSummary {
                degree: "Bachelor of Networks and Communication Systems from Aurora University (2021-2025)"
                    .to_string(),
                certifications: vec![
                    "Frontend Development - Solstice Academy (2025)".to_string(),
                    "Advanced Network Operations - Internet Society (2024)".to_string(),
                    "Linux Administration - Cisco Academy (2022)".to_string(),
                    "Cyber Security Bootcamp - Shield Labs (2021)".to_string(),
                ],
            },
            services: vec![
                "Web Development".to_string(),
                "API Testing & Integration".to_string(),
                "Documentation".to_string(),
                "CI/CD Setup".to_string(),
                "IT Support".to_string(),
                "System Monitoring".to_string(),
                "Network Configuration".to_string(),
            ],
            availability:
                "Open for part-time and project-based work from next month. Let's talk about your project timeline!"
                    .to_string(),
            contact: ContactDetails {
                email: "amara@folio.dev".to_string(),
                phone: "+250 788 123 456".to_string(),
                location: "Kigali, Rwanda".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Sample profile ----

    #[test]
    fn test_sample_is_valid() {
        assert!(KnowledgeBase::sample().validate().is_ok());
    }

    #[test]
    fn test_sample_has_two_employers_with_aliases() {
        let kb = KnowledgeBase::sample();
        assert_eq!(kb.experience.len(), 2);
        assert!(kb.experience.iter().all(|e| !e.aliases.is_empty()));
    }

    #[test]
    fn test_sample_services_count() {
        assert_eq!(KnowledgeBase::sample().services.len(), 7);
    }

    // ---- Validation ----

    #[test]
    fn test_validate_rejects_empty_owner() {
        let mut kb = KnowledgeBase::sample();
        kb.owner = "  ".to_string();
        let err = kb.validate().unwrap_err();
        assert!(err.to_string().contains("owner"));
    }

    #[test]
    fn test_validate_rejects_no_experience() {
        let mut kb = KnowledgeBase::sample();
        kb.experience.clear();
        assert!(kb.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_achievement() {
        let mut kb = KnowledgeBase::sample();
        kb.experience[0].achievements[1] = String::new();
        let err = kb.validate().unwrap_err();
        assert!(err.to_string().contains("achievement"));
    }

    #[test]
    fn test_validate_rejects_empty_availability() {
        let mut kb = KnowledgeBase::sample();
        kb.availability = String::new();
        let err = kb.validate().unwrap_err();
        assert!(err.to_string().contains("availability"));
    }

    #[test]
    fn test_validate_rejects_empty_contact_email() {
        let mut kb = KnowledgeBase::sample();
        kb.contact.email = String::new();
        let err = kb.validate().unwrap_err();
        assert!(err.to_string().contains("contact.email"));
    }

    #[test]
    fn test_validate_rejects_no_certifications() {
        let mut kb = KnowledgeBase::sample();
        kb.education.certifications.clear();
        assert!(kb.validate().is_err());
    }

    // ---- File round-trip ----

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");

        let kb = KnowledgeBase::sample();
        kb.save(&path).unwrap();

        let loaded = KnowledgeBase::load(&path).unwrap();
        assert_eq!(loaded.owner, kb.owner);
        assert_eq!(loaded.experience.len(), kb.experience.len());
        assert_eq!(loaded.experience[0].organization, kb.experience[0].organization);
        assert_eq!(loaded.services, kb.services);
        assert_eq!(loaded.availability, kb.availability);
        assert_eq!(loaded.contact.email, kb.contact.email);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(KnowledgeBase::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");

        let mut kb = KnowledgeBase::sample();
        kb.services.clear();
        std::fs::write(&path, toml::to_string_pretty(&kb).unwrap()).unwrap();

        assert!(KnowledgeBase::load(&path).is_err());
    }

    #[test]
    fn test_load_or_sample_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let kb = KnowledgeBase::load_or_sample(&path);
        assert_eq!(kb.owner, KnowledgeBase::sample().owner);
    }

    #[test]
    fn test_aliases_default_to_empty_when_missing() {
        let toml_str = r#"
            owner = "Amara"
            services = ["Web Development"]
            availability = "Open for work"

            [[experience]]
            organization = "Meridian Dental Clinic"
            role_title = "Web Developer"
            achievements = ["Shipped the portal"]

            [experience.period]
            start = "Apr 2022"
            end = "Jan 2025"

            [education]
            degree = "BSc"
            certifications = ["Linux Administration"]

            [contact]
            email = "amara@folio.dev"
            phone = "+250 788 123 456"
            location = "Kigali, Rwanda"
        "#;
        let kb: KnowledgeBase = toml::from_str(toml_str).unwrap();
        assert!(kb.experience[0].aliases.is_empty());
        assert!(kb.validate().is_ok());
    }
}
