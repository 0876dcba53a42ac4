use crate::session::Session;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders one of two branches depending on whether someone is signed in.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let session = use_store_value::<Session>();
	let branch = match session.is_authenticated() {
		true => &props.identified,
		false => &props.anonymous,
	};
	branch.clone().unwrap_or_default()
}
