use super::*;

#[test]
fn test_pagination_error_becomes_validation_error() {
    let err: DomainError = PaginationError::InvalidPage(0).into();
    match err {
        DomainError::ValidationErr(ValidationError::InvalidPagination { field, message }) => {
            assert_eq!(field, "page");
            assert!(message.contains("at least 1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(DomainError::not_found("Property").to_string(), "Property not found");
    assert_eq!(
        DomainError::from(AuthError::InvalidCredentials).to_string(),
        "Invalid email or password"
    );
    assert_eq!(
        ValidationError::UnknownSortOption { value: "cheapest".into() }.field(),
        "sort"
    );
    assert_eq!(ValidationError::InvalidEmail.field(), "email");
    assert_eq!(ValidationError::required("name").field(), "name");
}
