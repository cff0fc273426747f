//! Cross-crate scenarios for the sacristan workspace.

mod calendar {
    mod coverage;
}

mod generation {
    mod integration;
}
