//! Naming conventions for generated React context artifacts.
//!
//! Every identifier in the generated files derives from a display name via
//! these functions; nothing formats names inline.

use ctxgen_core::{to_camel_case, to_pascal_case};

// Property-level derivations.

/// Property accessor name: `"display name"` -> `displayName`.
pub fn prop_name(name: &str) -> String {
    to_camel_case(name)
}

/// Property setter name: `"display name"` -> `setDisplayName`.
pub fn set_prop_name(name: &str) -> String {
    format!("set{}", to_pascal_case(name))
}

/// Property getter name: `"display name"` -> `getDisplayName`.
pub fn get_prop_name(name: &str) -> String {
    format!("get{}", to_pascal_case(name))
}

/// State slot name: `"display name"` -> `displayNameState`.
pub fn state_prop_name(name: &str) -> String {
    format!("{}State", to_camel_case(name))
}

/// State setter name: `"display name"` -> `setDisplayNameState`.
pub fn set_state_prop_name(name: &str) -> String {
    format!("set{}State", to_pascal_case(name))
}

/// Set-event-handler name: `"display name"` -> `displayNameSetEventHandler`.
pub fn set_event_handler_prop_name(name: &str) -> String {
    format!("{}SetEventHandler", to_camel_case(name))
}

/// URL parameter name: `"display name"` -> `displayNameUrlParam`.
pub fn url_param_prop_name(name: &str) -> String {
    format!("{}UrlParam", to_camel_case(name))
}

/// Custom state-to-location mapper name: `customLocationFromDisplayName`.
pub fn custom_location_from_state_name(name: &str) -> String {
    format!("customLocationFrom{}", to_pascal_case(name))
}

/// Custom location-to-state mapper name: `customDisplayNameFromLocation`.
pub fn custom_state_from_location_name(name: &str) -> String {
    format!("custom{}FromLocation", to_pascal_case(name))
}

/// Fluent mutator name: `"display name"` -> `withDisplayName`.
pub fn with_prop_name(name: &str) -> String {
    format!("with{}", to_pascal_case(name))
}

/// Initial-value alias: `"display name"` -> `initialDisplayName`.
pub fn initial_prop_name(name: &str) -> String {
    format!("initial{}", to_pascal_case(name))
}

/// Default-value constant: `"display name"` -> `DefaultDisplayName`.
pub fn default_value_name(name: &str) -> String {
    format!("Default{}", to_pascal_case(name))
}

// Type-level derivations.

pub fn state_interface_name(name: &str) -> String {
    format!("I{}State", to_pascal_case(name))
}

pub fn state_props_interface_name(name: &str) -> String {
    format!("I{}StateProps", to_pascal_case(name))
}

pub fn provider_props_interface_name(name: &str) -> String {
    format!("I{}ContextProviderProps", to_pascal_case(name))
}

pub fn context_value_interface_name(name: &str) -> String {
    format!("I{}ContextValue", to_pascal_case(name))
}

pub fn context_interface_name(name: &str) -> String {
    format!("I{}Context", to_pascal_case(name))
}

pub fn default_state_name(name: &str) -> String {
    format!("Default{}State", to_pascal_case(name))
}

pub fn default_context_value_name(name: &str) -> String {
    format!("Default{}ContextValue", to_pascal_case(name))
}

/// State hook name: `"user profile"` -> `UserProfileState`.
pub fn state_hook_name(name: &str) -> String {
    format!("{}State", to_pascal_case(name))
}

pub fn context_name(name: &str) -> String {
    format!("{}Context", to_pascal_case(name))
}

pub fn context_provider_name(name: &str) -> String {
    format!("{}ContextProvider", to_pascal_case(name))
}

pub fn context_builder_name(name: &str) -> String {
    format!("{}ContextBuilder", to_pascal_case(name))
}

// File names.

/// Context module name without extension, used in import paths.
pub fn context_module_name(name: &str) -> String {
    format!("{}Context", to_camel_case(name))
}

pub fn context_file_name(name: &str) -> String {
    format!("{}Context.tsx", to_camel_case(name))
}

pub fn context_builder_file_name(name: &str) -> String {
    format!("{}ContextBuilder.tsx", to_camel_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_level_names() {
        assert_eq!(prop_name("display name"), "displayName");
        assert_eq!(set_prop_name("displayName"), "setDisplayName");
        assert_eq!(get_prop_name("displayName"), "getDisplayName");
        assert_eq!(state_prop_name("displayName"), "displayNameState");
        assert_eq!(set_state_prop_name("displayName"), "setDisplayNameState");
        assert_eq!(
            set_event_handler_prop_name("displayName"),
            "displayNameSetEventHandler"
        );
        assert_eq!(url_param_prop_name("displayName"), "displayNameUrlParam");
        assert_eq!(
            custom_location_from_state_name("displayName"),
            "customLocationFromDisplayName"
        );
        assert_eq!(
            custom_state_from_location_name("displayName"),
            "customDisplayNameFromLocation"
        );
        assert_eq!(with_prop_name("displayName"), "withDisplayName");
        assert_eq!(initial_prop_name("displayName"), "initialDisplayName");
        assert_eq!(default_value_name("displayName"), "DefaultDisplayName");
    }

    #[test]
    fn test_type_level_names() {
        assert_eq!(state_interface_name("user profile"), "IUserProfileState");
        assert_eq!(state_props_interface_name("app"), "IAppStateProps");
        assert_eq!(
            provider_props_interface_name("app"),
            "IAppContextProviderProps"
        );
        assert_eq!(context_value_interface_name("app"), "IAppContextValue");
        assert_eq!(context_interface_name("app"), "IAppContext");
        assert_eq!(default_state_name("app"), "DefaultAppState");
        assert_eq!(default_context_value_name("app"), "DefaultAppContextValue");
        assert_eq!(state_hook_name("app"), "AppState");
        assert_eq!(context_name("app"), "AppContext");
        assert_eq!(context_provider_name("app"), "AppContextProvider");
        assert_eq!(context_builder_name("app"), "AppContextBuilder");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(context_file_name("userProfile"), "userProfileContext.tsx");
        assert_eq!(
            context_builder_file_name("user profile"),
            "userProfileContextBuilder.tsx"
        );
        assert_eq!(context_module_name("userProfile"), "userProfileContext");
    }
}
