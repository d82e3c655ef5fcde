use std::ops::RangeInclusive;
use std::time::Duration;

use derivative::Derivative;
use log::{debug, info};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::led::rgb::RGB;
use crate::util::error::{NanoleafError, Result};
use crate::util::status::{status_error, Access};

pub mod effects;
pub mod info;
pub mod layout;
pub mod rhythm;

use info::{DeviceInfo, InfoResponse};

/// Port the device's HTTP API listens on.
pub const DEFAULT_PORT: u16 = 16021;

pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = 0..=100;
pub const HUE_RANGE: RangeInclusive<i32> = 0..=360;
pub const SATURATION_RANGE: RangeInclusive<i32> = 0..=100;
pub const COLOR_TEMPERATURE_RANGE: RangeInclusive<i32> = 1200..=6500;

/// Client for a single Nanoleaf controller.
///
/// The HTTP session is injected by the caller and shared by every request the
/// client makes. Getters and mutators run one request at a time; the methods
/// that update the cached [`DeviceInfo`] take `&mut self`, so a single client
/// cannot have two of them in flight.
///
/// Cached state is only written after the device answered with success, so
/// dropping a pending call leaves it at its previous value.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Nanoleaf {
    host: String,
    port: u16,
    #[derivative(Debug = "ignore")]
    auth_token: Option<String>,
    #[derivative(Debug = "ignore")]
    client: Client,
    info: DeviceInfo,
}

#[derive(Deserialize, Debug)]
struct AuthorizeResponse {
    auth_token: String,
}

impl Nanoleaf {
    /// Creates a client for `host` on the default port without a token.
    ///
    /// Nothing is sent until the first call. Use [`Self::with_auth_token`] to
    /// reuse a token from an earlier [`Self::authorize`].
    pub fn new(client: Client, host: impl Into<String>) -> Self {
        Nanoleaf {
            host: host.into(),
            port: DEFAULT_PORT,
            auth_token: None,
            client,
            info: DeviceInfo::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /**
    Sets the token used for every call below `/api/v1/<token>/`.
     */
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The state cached by the last `get_info()` and any mutators since.
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Hands the HTTP session back to the caller.
    pub fn into_client(self) -> Client {
        self.client
    }

    fn base_url(&self) -> String {
        // IPv6 literals need brackets in a URL.
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}/api/v1", self.host, self.port)
        } else {
            format!("http://{}:{}/api/v1", self.host, self.port)
        }
    }

    fn token_url(&self, path: &str) -> Result<String> {
        let token = self.auth_token.as_deref().ok_or(NanoleafError::InvalidToken)?;
        Ok(format!("{}/{}/{}", self.base_url(), token, path))
    }

    async fn execute(&self, request: RequestBuilder, access: Access) -> Result<String> {
        let response = request.send().await.map_err(NanoleafError::Unavailable)?;
        let status = response.status();
        let text = response.text().await.map_err(NanoleafError::Unavailable)?;
        debug!("{} responded with status: {}", self.host, status);
        match status_error(status, &text, access) {
            Some(error) => Err(error),
            None => Ok(text),
        }
    }

    async fn send_token_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let url = self.token_url(path)?;
        debug!("{} /{}", method, path);
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, Access::Token).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self
            .send_token_request::<()>(Method::GET, path, None)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send_token_request(Method::PUT, path, Some(body))
            .await
            .map(|_| ())
    }

    /// Requests a new token. The device only hands one out for 30 seconds
    /// after its power button was held; otherwise this fails with
    /// [`NanoleafError::Unauthorized`].
    ///
    /// The token is stored on the client and returned so the caller can
    /// persist it.
    pub async fn authorize(&mut self) -> Result<String> {
        let url = format!("{}/new", self.base_url());
        let request = self.client.post(&url);
        let text = self.execute(request, Access::Pairing).await?;
        let response: AuthorizeResponse = serde_json::from_str(&text)?;
        info!("Obtained a new auth token from {}", self.host);
        self.auth_token = Some(response.auth_token.clone());
        Ok(response.auth_token)
    }

    /// Revokes the current token on the device and forgets it locally.
    pub async fn deauthorize(&mut self) -> Result<()> {
        self.send_token_request::<()>(Method::DELETE, "", None)
            .await?;
        info!("Revoked auth token on {}", self.host);
        self.auth_token = None;
        Ok(())
    }

    /// Fetches the full device state and overwrites the cached info.
    pub async fn get_info(&mut self) -> Result<&DeviceInfo> {
        let response: InfoResponse = self.get_json("").await?;
        self.info = response.into();
        Ok(&self.info)
    }

    /// Flashes the panels so the device can be spotted.
    pub async fn identify(&self) -> Result<()> {
        self.send_token_request::<()>(Method::PUT, "identify", None)
            .await
            .map(|_| ())
    }

    pub async fn turn_on(&mut self) -> Result<()> {
        self.put_json("state", &json!({ "on": { "value": true } }))
            .await?;
        self.info.is_on = true;
        Ok(())
    }

    pub async fn turn_off(&mut self) -> Result<()> {
        self.put_json("state", &json!({ "on": { "value": false } }))
            .await?;
        self.info.is_on = false;
        Ok(())
    }

    /// Sets the brightness, optionally fading over `transition`.
    ///
    /// # Arguments
    /// - `brightness`: Range is 0..=100.
    /// - `transition`: Sent to the device in whole seconds.
    ///
    /// The cached value becomes the requested target even while the device
    /// is still fading towards it.
    pub async fn set_brightness(
        &mut self,
        brightness: i32,
        transition: Option<Duration>,
    ) -> Result<()> {
        let value = check_range("brightness", brightness, BRIGHTNESS_RANGE)?;
        let body = match transition {
            Some(transition) => {
                json!({ "brightness": { "value": value, "duration": transition.as_secs() } })
            }
            None => json!({ "brightness": { "value": value } }),
        };
        self.put_json("state", &body).await?;
        self.info.brightness.value = value;
        Ok(())
    }

    /// Sets the hue in degrees (0..=360).
    pub async fn set_hue(&mut self, hue: i32) -> Result<()> {
        let value = check_range("hue", hue, HUE_RANGE)?;
        self.put_json("state", &json!({ "hue": { "value": value } }))
            .await?;
        self.info.hue.value = value;
        self.info.color_mode = "hs".to_string();
        Ok(())
    }

    /// Sets the saturation in percent (0..=100).
    pub async fn set_saturation(&mut self, saturation: i32) -> Result<()> {
        let value = check_range("saturation", saturation, SATURATION_RANGE)?;
        self.put_json("state", &json!({ "sat": { "value": value } }))
            .await?;
        self.info.saturation.value = value;
        self.info.color_mode = "hs".to_string();
        Ok(())
    }

    /// Sets the white colour temperature in Kelvin (1200..=6500).
    pub async fn set_color_temperature(&mut self, kelvin: i32) -> Result<()> {
        let value = check_range("color temperature", kelvin, COLOR_TEMPERATURE_RANGE)?;
        self.put_json("state", &json!({ "ct": { "value": value } }))
            .await?;
        self.info.color_temperature.value = value;
        self.info.color_mode = "ct".to_string();
        Ok(())
    }

    /// Shows a solid colour by sending hue, saturation and brightness in one
    /// state write.
    pub async fn set_color(&mut self, rgb: RGB) -> Result<()> {
        let hsb = rgb.to_hsb();
        self.put_json(
            "state",
            &json!({
                "hue": { "value": hsb.hue },
                "sat": { "value": hsb.saturation },
                "brightness": { "value": hsb.brightness },
            }),
        )
        .await?;
        self.info.hue.value = hsb.hue;
        self.info.saturation.value = hsb.saturation;
        self.info.brightness.value = hsb.brightness;
        self.info.color_mode = "hs".to_string();
        Ok(())
    }

    /// Selects a saved effect.
    ///
    /// When the cached effects list is populated (after `get_info()`), names
    /// missing from it are rejected without a request.
    pub async fn set_effect(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(NanoleafError::InvalidValue(
                "effect name must not be empty".to_string(),
            ));
        }
        if !self.info.effects_list.is_empty() && !self.info.effects_list.iter().any(|e| e == name)
        {
            return Err(NanoleafError::InvalidValue(format!(
                "effect {:?} is not in the device's effects list",
                name
            )));
        }
        self.select_effect(name).await?;
        self.info.effect = Some(name.to_string());
        self.info.color_mode = "effect".to_string();
        Ok(())
    }
}

fn check_range(name: &str, value: i32, range: RangeInclusive<i32>) -> Result<u16> {
    if range.contains(&value) {
        Ok(value as u16)
    } else {
        Err(NanoleafError::InvalidValue(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}
