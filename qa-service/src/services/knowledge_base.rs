//! Static per-category guidance.

use std::collections::HashMap;

use crate::models::{Category, DocumentationLink};

pub const DEFAULT_ANSWER: &str = "No specific guidance available for this category";

/// Guidance for one category. Links and steps are ordered, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub answer_text: String,
    pub documentation_links: Vec<DocumentationLink>,
    pub troubleshooting_steps: Vec<String>,
}

impl KnowledgeEntry {
    fn new(answer: &str, links: &[(&str, &str)], steps: &[&str]) -> Self {
        Self {
            answer_text: answer.to_string(),
            documentation_links: links
                .iter()
                .map(|(title, url)| DocumentationLink::new(title, url))
                .collect(),
            troubleshooting_steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Read-only table built once at startup. Categories without an entry get
/// [`DEFAULT_ANSWER`] and empty link and step lists.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<Category, KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn from_entries(entries: impl IntoIterator<Item = (Category, KnowledgeEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::from_entries([
            (
                Category::Networking,
                KnowledgeEntry::new(
                    "For networking issues, check router settings and firewall rules.",
                    &[
                        ("Networking guide", "https://docs.example.com/networking-guide"),
                        (
                            "Network troubleshooting",
                            "https://support.example.com/network-troubleshooting",
                        ),
                    ],
                    &[
                        "Check physical connections and router LEDs",
                        "Restart network devices and test connectivity",
                        "Verify firewall rules and port configurations",
                    ],
                ),
            ),
            (
                Category::Security,
                KnowledgeEntry::new(
                    "Security problems often require reviewing access controls and encryption protocols.",
                    &[
                        (
                            "Security best practices",
                            "https://docs.example.com/security-best-practices",
                        ),
                        (
                            "Secure configuration",
                            "https://support.example.com/secure-configuration",
                        ),
                    ],
                    &[
                        "Review access control lists and permissions",
                        "Check for unauthorized device connections",
                        "Verify encryption protocols and certificate validity",
                    ],
                ),
            ),
            (
                Category::Storage,
                KnowledgeEntry::new(
                    "Storage issues may involve disk space management or RAID configuration.",
                    &[
                        (
                            "Storage optimization",
                            "https://docs.example.com/storage-optimization",
                        ),
                        (
                            "Storage diagnosis",
                            "https://support.example.com/storage-diagnosis",
                        ),
                    ],
                    &[
                        "Monitor disk space and storage quotas",
                        "Check RAID array status and rebuild if needed",
                        "Verify storage path configurations and permissions",
                    ],
                ),
            ),
            (
                Category::Virtualization,
                KnowledgeEntry::new(
                    "Virtualization problems typically relate to resource allocation or hypervisor settings.",
                    &[
                        (
                            "Virtualization tips",
                            "https://docs.example.com/virtualization-tips",
                        ),
                        (
                            "VM configuration",
                            "https://support.example.com/vm-configuration",
                        ),
                    ],
                    &[
                        "Check resource allocation for virtual machines",
                        "Verify hypervisor version and patches",
                        "Monitor VM performance counters for bottlenecks",
                    ],
                ),
            ),
        ])
    }

    pub fn entry(&self, category: Category) -> Option<&KnowledgeEntry> {
        self.entries.get(&category)
    }

    pub fn answer_for(&self, category: Category) -> &str {
        self.entry(category)
            .map(|e| e.answer_text.as_str())
            .unwrap_or(DEFAULT_ANSWER)
    }

    pub fn documentation_links_for(&self, category: Category) -> &[DocumentationLink] {
        self.entry(category)
            .map(|e| e.documentation_links.as_slice())
            .unwrap_or(&[])
    }

    pub fn troubleshooting_steps_for(&self, category: Category) -> &[String] {
        self.entry(category)
            .map(|e| e.troubleshooting_steps.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORIES;

    #[test]
    fn test_standard_covers_every_category() {
        let kb = KnowledgeBase::standard();
        for category in CATEGORIES {
            assert!(!kb.answer_for(category).is_empty());
            assert_ne!(kb.answer_for(category), DEFAULT_ANSWER);
            assert_eq!(kb.documentation_links_for(category).len(), 2);
            assert_eq!(kb.troubleshooting_steps_for(category).len(), 3);
        }
    }

    #[test]
    fn test_networking_entry_order() {
        let kb = KnowledgeBase::standard();
        assert_eq!(
            kb.answer_for(Category::Networking),
            "For networking issues, check router settings and firewall rules."
        );

        let urls: Vec<&str> = kb
            .documentation_links_for(Category::Networking)
            .iter()
            .map(|l| l.url.as_str())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://docs.example.com/networking-guide",
                "https://support.example.com/network-troubleshooting",
            ]
        );

        assert_eq!(
            kb.troubleshooting_steps_for(Category::Networking)[0],
            "Check physical connections and router LEDs"
        );
    }

    #[test]
    fn test_virtualization_last_step() {
        let kb = KnowledgeBase::standard();
        assert_eq!(
            kb.troubleshooting_steps_for(Category::Virtualization)[2],
            "Monitor VM performance counters for bottlenecks"
        );
    }

    #[test]
    fn test_missing_entry_uses_defaults() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.answer_for(Category::Storage), DEFAULT_ANSWER);
        assert!(kb.documentation_links_for(Category::Storage).is_empty());
        assert!(kb.troubleshooting_steps_for(Category::Storage).is_empty());
    }

    #[test]
    fn test_partial_table() {
        let standard = KnowledgeBase::standard();
        let security = standard.entry(Category::Security).cloned().unwrap();
        let kb = KnowledgeBase::from_entries([(Category::Security, security)]);

        assert_eq!(
            kb.answer_for(Category::Security),
            standard.answer_for(Category::Security)
        );
        assert_eq!(kb.answer_for(Category::Networking), DEFAULT_ANSWER);
    }
}
