use crate::{
    error::{Error, Result},
    util::to_simple,
};
use serde_json::Value;
use ureq::{Agent, AgentBuilder};

pub type Param<'a> = (&'a str, String);

pub trait Transport {
    // GET `url` with `params` appended as a query string, decode the body as json
    fn get(&self, url: &str, params: &[Param]) -> Result<Value>;
}

pub struct Client {
    agent: Agent,
}

impl Client {
    pub fn new(user_agent: &str) -> Self {
        Client {
            agent: AgentBuilder::new().user_agent(user_agent).build(),
        }
    }
}

impl Transport for Client {
    fn get(&self, url: &str, params: &[Param]) -> Result<Value> {
        log::debug!("GET {} {:?}", url, params);
        let request = params
            .iter()
            .fold(self.agent.get(url), |req, (name, value)| req.query(name, value));

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(Error::transport(format!(
                    "HTTP error {}: {}",
                    code,
                    response.status_text()
                )));
            }
            Err(ureq::Error::Transport(e)) => return Err(to_simple("Network error", e).into()),
        };

        let body = response
            .into_string()
            .map_err(|e| to_simple("Network error", e))?;
        let json: Value =
            serde_json::from_str(&body).map_err(|e| to_simple("Failed to parse response", e))?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{
        init_log,
        testing::{closed_port, serve_once},
    };

    const BODY: &str = r#"{
        "resultCount": 1,
        "results": [
            {
                "collectionId": 979020229,
                "artistName": "Michael Kennedy (@mkennedy)",
                "collectionName": "Talk Python To Me",
                "feedUrl": "https://talkpython.fm/episodes/rss"
            }
        ]
    }"#;

    fn client() -> Client {
        Client::new("podsearch-test")
    }

    #[test]
    fn get_json() {
        init_log();
        let (base, request) = serve_once("200 OK", BODY);
        let params = [("term", "talk python".to_string()), ("media", "podcast".to_string())];
        let json = client()
            .get(&format!("{}/search", base), &params)
            .expect("get failed");
        assert_eq!(
            request.recv().expect("no request"),
            "GET /search?term=talk+python&media=podcast HTTP/1.1"
        );
        assert_eq!(json["resultCount"], 1);
        assert_eq!(json["results"][0]["collectionId"], 979020229);
    }

    #[test]
    fn http_error() {
        let (base, _request) = serve_once("503 Service Unavailable", "");
        let err = client()
            .get(&format!("{}/search", base), &[("term", "python".to_string())])
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "HTTP error 503: Service Unavailable");
    }

    #[test]
    fn json_decode_error() {
        let (base, _request) = serve_once("200 OK", "hi there");
        let err = client()
            .get(&format!("{}/search", base), &[("term", "python".to_string())])
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn network_error() {
        let err = client()
            .get(&format!("{}/search", closed_port()), &[("term", "python".to_string())])
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().starts_with("Network error: "));
    }
}
