// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! Builds the greeting response: a fixed message, the invocation time and the
//! invocation event echoed back.

use crate::configs::*;
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use serde::Serialize;

/// The JSON body of the greeting response. Field order is the wire order.
#[derive(Serialize)]
struct Greeting<'a, T: Serialize + ?Sized> {
    message:   &'a str,
    timestamp: String,
    event:     &'a T,
}

/// Renders the event as indented JSON for the diagnostic log line.
pub fn render_event<T: Serialize + ?Sized>(event: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(event)?)
}

/// Builds the greeting envelope for `event` as of `now`.
///
/// The timestamp is ISO-8601 in UTC with millisecond precision, e.g.
/// `2021-03-01T12:00:00.000Z`. Fails only if `event` cannot be serialized.
pub fn build<T: Serialize + ?Sized>(event: &T, now: DateTime<Utc>) -> Result<ResponseEnvelope> {
    let greeting = Greeting {
        message: GREETER_MESSAGE.as_str(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        event,
    };
    ResponseEnvelope::json(*GREETER_STATUS_OK, &greeting)
}

/// Logs the event and answers it with a greeting stamped with the current
/// time.
pub fn respond<T: Serialize + ?Sized>(event: &T) -> Result<ResponseEnvelope> {
    info!("Event: {}", render_event(event)?);
    build(event, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GreeterError;
    use chrono::{Duration, TimeZone};
    use serde::Serializer;
    use serde_json::{json, Value};

    fn body(envelope: &ResponseEnvelope) -> Value {
        serde_json::from_str(&envelope.body).expect("body is valid JSON")
    }

    #[test]
    fn empty_event() -> Result<()> {
        let now = Utc.ymd(2021, 3, 1).and_hms_milli(12, 30, 5, 42);
        let envelope = build(&json!({}), now)?;

        assert_eq!(envelope.status_code, 200);
        assert_eq!(
            envelope.body,
            r#"{"message":"Hello from Lambda!","timestamp":"2021-03-01T12:30:05.042Z","event":{}}"#
        );
        assert_eq!(envelope.headers.len(), 1);
        assert_eq!(envelope.content_type(), Some("application/json"));
        Ok(())
    }

    #[test]
    fn event_is_echoed_verbatim() -> Result<()> {
        let event = json!({ "a": 1, "b": [1, 2, 3] });
        let envelope = build(&event, Utc::now())?;
        assert_eq!(body(&envelope)["event"], event);

        let event = json!({
            "httpMethod": "GET",
            "path": "/hello",
            "queryStringParameters": { "name": "world" },
            "headers": { "host": "example.com" },
            "body": null,
            "isBase64Encoded": false
        });
        let envelope = build(&event, Utc::now())?;
        assert_eq!(body(&envelope)["event"], event);
        assert_eq!(body(&envelope)["message"], "Hello from Lambda!");
        Ok(())
    }

    #[test]
    fn scalar_events() -> Result<()> {
        for event in [json!(null), json!(7), json!("text"), json!([1, "two", null])] {
            let envelope = build(&event, Utc::now())?;
            assert_eq!(envelope.status_code, 200);
            assert_eq!(body(&envelope)["event"], event);
        }
        Ok(())
    }

    #[test]
    fn timestamp_is_current() -> Result<()> {
        let before = Utc::now();
        let envelope = respond(&json!({ "answer": 42 }))?;
        let after = Utc::now();

        let timestamp = body(&envelope)["timestamp"]
            .as_str()
            .expect("timestamp is a string")
            .to_owned();
        assert!(timestamp.ends_with('Z'));
        let timestamp = DateTime::parse_from_rfc3339(&timestamp)
            .expect("timestamp is ISO-8601")
            .with_timezone(&Utc);
        assert!(timestamp >= before - Duration::milliseconds(1));
        assert!(timestamp <= after);
        Ok(())
    }

    #[test]
    fn rendered_event_is_indented() -> Result<()> {
        let rendered = render_event(&json!({ "a": 1 }))?;
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
        Ok(())
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cyclic structure"))
        }
    }

    #[test]
    fn unserializable_event_fails() {
        let err = respond(&Unserializable).unwrap_err();
        assert!(matches!(err, GreeterError::SerdeJson(_)));
        assert!(err.to_string().contains("cyclic structure"));

        assert!(build(&Unserializable, Utc::now()).is_err());
    }
}
