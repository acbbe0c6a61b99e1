use super::*;

fn form() -> ContactForm {
    ContactForm {
        name: " Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Engines".to_owned(),
        message: "Analytical ones, ideally.".to_owned(),
    }
}

#[test]
fn request_carries_service_identifiers() {
    let value = serde_json::to_value(EmailRequest::from_form(&form())).unwrap();
    assert_eq!(value["service_id"], SERVICE_ID);
    assert_eq!(value["template_id"], TEMPLATE_ID);
    assert_eq!(value["user_id"], PUBLIC_KEY);
}

#[test]
fn template_params_trim_and_route_to_owner() {
    let value = serde_json::to_value(EmailRequest::from_form(&form())).unwrap();
    let params = &value["template_params"];
    assert_eq!(params["from_name"], "Ada Lovelace");
    assert_eq!(params["from_email"], "ada@example.com");
    assert_eq!(params["subject"], "Engines");
    assert_eq!(params["to_email"], crate::content::OWNER_EMAIL);
}

#[test]
fn endpoint_is_https() {
    assert!(ENDPOINT.starts_with("https://"));
}
