use devportal_core::Theme;
use devportal_core::theme::theme_for_index;
use yew::prelude::*;

/// Theme in effect plus the action that advances it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: &'static Theme,
    pub index: usize,
    pub on_cycle: Callback<()>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            theme: theme_for_index(0),
            index: 0,
            on_cycle: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub index: usize,
    #[prop_or_default]
    pub on_cycle: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

fn theme_style(theme: &Theme) -> String {
    format!(
        "--console-primary:{};--console-background:{};--console-text:{};",
        theme.primary, theme.background, theme.text
    )
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let context = ThemeContext {
        theme: theme_for_index(props.index),
        index: props.index,
        on_cycle: props.on_cycle.clone(),
    };
    use_document_theme(context.theme.name);

    html! {
        <ContextProvider<ThemeContext> context={context.clone()}>
            <div class="theme-root" data-theme={context.theme.name} style={theme_style(context.theme)}>
                { props.children.clone() }
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_document_theme(name: &'static str) {
    use_effect_with(name, |name| crate::dom::set_document_theme(name));
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_document_theme(_name: &'static str) {}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_style_exposes_tokens() {
        let style = theme_style(theme_for_index(1));
        assert!(style.contains("--console-background:#121212"));
    }
}
