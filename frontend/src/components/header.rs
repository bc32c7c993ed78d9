use yew::prelude::*;

/// Top-level screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Entry,
    View,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Entry => "Entry",
            Screen::View => "View",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Screen,
    pub can_go_back: bool,
    pub on_navigate: Callback<Screen>,
    pub on_back: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |screen: Screen| {
        let on_navigate = props.on_navigate.clone();
        let active = props.current == screen;
        html! {
            <button
                class={classes!("nav-btn", active.then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(screen))}
            >
                {screen.title()}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                {if props.current != Screen::Home && props.can_go_back {
                    let on_back = props.on_back.clone();
                    html! {
                        <button
                            class="nav-btn back"
                            aria-label="back"
                            onclick={Callback::from(move |_: MouseEvent| on_back.emit(()))}
                        >
                            {"←"}
                        </button>
                    }
                } else { html! {} }}
                {nav_button(Screen::Home)}
                {nav_button(Screen::Entry)}
                {nav_button(Screen::View)}
            </div>
        </header>
    }
}
