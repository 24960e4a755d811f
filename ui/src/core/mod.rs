//! Cross-cutting helpers shared by views and components.

pub mod format;
