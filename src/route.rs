use crate::{csv::Upload, hooks::use_settings, session::Session};
use yew::prelude::*;
use yew_router::{prelude::Redirect, Routable};
use yewdux::prelude::use_store_value;

/// What a page needs before it can be shown. Each level includes the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Access {
	Public,
	SignedIn,
	Connected,
	Uploaded,
}

/// What the visitor currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Standing {
	pub signed_in: bool,
	pub has_credentials: bool,
	pub has_upload: bool,
}

impl Access {
	/// Where to send a visitor who lacks what this level needs.
	pub fn redirect(&self, standing: Standing) -> Option<crate::Route> {
		if *self >= Access::SignedIn && !standing.signed_in {
			return Some(crate::Route::Login);
		}
		if *self >= Access::Connected && !standing.has_credentials {
			return Some(crate::Route::Settings);
		}
		if *self >= Access::Uploaded && !standing.has_upload {
			return Some(crate::Route::Import);
		}
		None
	}
}

pub struct Switch<T>(std::marker::PhantomData<T>);
impl<T> Component for Switch<T>
where
	T: Routable + Route + 'static,
{
	type Message = ();
	type Properties = ();

	fn create(_ctx: &Context<Self>) -> Self {
		Self(Default::default())
	}

	fn view(&self, _ctx: &Context<Self>) -> Html {
		html! {
			<yew_router::Switch<T> render={|route: T| {
				let access = route.access();
				html!(<Guard {access}>{route.html()}</Guard>)
			}} />
		}
	}
}

pub trait Route {
	fn access(&self) -> Access {
		Access::Public
	}

	fn html(self) -> Html;

	fn switch() -> Html
	where
		Self: Routable + 'static,
	{
		html! { <Switch<Self> /> }
	}
}

#[derive(Properties, PartialEq)]
struct GuardProps {
	access: Access,
	children: Html,
}

#[function_component]
fn Guard(GuardProps { access, children }: &GuardProps) -> Html {
	let session = use_store_value::<Session>();
	let upload = use_store_value::<Upload>();
	let settings = use_settings();
	let standing = Standing {
		signed_in: session.is_authenticated(),
		has_credentials: settings.is_some(),
		has_upload: upload.grid.is_some(),
	};
	match access.redirect(standing) {
		Some(to) => {
			log::debug!(target: "route", "redirecting to {}", to.to_path());
			html!(<Redirect<crate::Route> {to} />)
		}
		None => children.clone(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn redirects_follow_what_is_missing() {
		let nobody = Standing::default();
		assert_eq!(Access::Public.redirect(nobody), None);
		assert_eq!(Access::SignedIn.redirect(nobody), Some(crate::Route::Login));
		assert_eq!(Access::Uploaded.redirect(nobody), Some(crate::Route::Login));

		let signed_in = Standing {
			signed_in: true,
			..nobody
		};
		assert_eq!(Access::SignedIn.redirect(signed_in), None);
		assert_eq!(Access::Connected.redirect(signed_in), Some(crate::Route::Settings));

		let connected = Standing {
			has_credentials: true,
			..signed_in
		};
		assert_eq!(Access::Connected.redirect(connected), None);
		assert_eq!(Access::Uploaded.redirect(connected), Some(crate::Route::Import));
		let uploaded = Standing {
			has_upload: true,
			..connected
		};
		assert_eq!(Access::Uploaded.redirect(uploaded), None);
	}
}
