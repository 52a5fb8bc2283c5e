// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::endpoints::ApiEndpoints;
use crate::error::RequestError;
use activity_board_shared::messages::activities::ActivityList;
use activity_board_shared::messages::registration::RegistrationResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// The server's answer to a signup or unregister request
#[derive(Clone, Debug)]
pub struct ApiReply {
	/// Whether the response status was in the 2xx range
	pub ok: bool,
	pub body: RegistrationResponse,
}

/// Operations the activity backend provides
pub trait ActivityApi {
	async fn fetch_activities(&self) -> Result<ActivityList, RequestError>;

	async fn sign_up(&self, activity: &str, email: &str) -> Result<ApiReply, RequestError>;

	async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, RequestError>;
}

/// Talks to the activity backend over HTTP from the browser
pub struct HttpActivityApi {
	endpoints: ApiEndpoints,
}

impl HttpActivityApi {
	pub fn new(endpoints: ApiEndpoints) -> Self {
		Self { endpoints }
	}
}

impl ActivityApi for HttpActivityApi {
	async fn fetch_activities(&self) -> Result<ActivityList, RequestError> {
		let url = self.endpoints.activities();
		log::debug!("Requesting activity list from {}", url);
		let response = Request::get(url.as_str()).send().await?;
		if !response.ok() {
			return Err(RequestError::Status(response.status()));
		}
		read_json(response).await
	}

	async fn sign_up(&self, activity: &str, email: &str) -> Result<ApiReply, RequestError> {
		let url = self.endpoints.signup(activity, email);
		log::debug!("Sending signup request to {}", url);
		let response = Request::post(url.as_str()).send().await?;
		read_reply(response).await
	}

	async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, RequestError> {
		let url = self.endpoints.unregister(activity, email);
		log::debug!("Sending unregister request to {}", url);
		let response = Request::delete(url.as_str()).send().await?;
		read_reply(response).await
	}
}

/// Reads a JSON body regardless of status. Bodies that aren't valid JSON of the expected shape are errors.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
	let body = response.text().await?;
	Ok(serde_json::from_str(&body)?)
}

async fn read_reply(response: Response) -> Result<ApiReply, RequestError> {
	let ok = response.ok();
	let body = read_json(response).await?;
	Ok(ApiReply { ok, body })
}
