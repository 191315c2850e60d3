//! Site and page data handed to templates.
//!
//! # Sources
//!
//! | Type | Fields from | Include base |
//! |------|-------------|--------------|
//! | `Site` | `[site].settings` merged over defaults | - |
//! | `Page` | its content file | the file's directory |

mod page;
mod site;

pub use page::Page;
pub use site::Site;
