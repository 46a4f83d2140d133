//! Escalation Replies
//!
//! Questions that are not about products get a fixed hand-off message
//! instead of a generated answer.

use crate::category::Category;

pub const RETURNS_REPLY: &str = "For return-related queries, please contact our support team at support@techgear.com or call 1-800-TECH-GEAR. Our returns process typically takes 5-7 business days.";

pub const GENERAL_REPLY: &str = "I'm sorry, I cannot handle this general query. Let me escalate this to a human agent who can assist you further.";

/// Hand-off text for a category. Products never reach escalation in the
/// workflow, but get the general reply if they do.
pub const fn escalate(category: Category) -> &'static str {
    match category {
        Category::Returns => RETURNS_REPLY,
        Category::Products | Category::General => GENERAL_REPLY,
    }
}
