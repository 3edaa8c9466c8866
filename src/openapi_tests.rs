#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        // Verify that the schema contains the expected components
        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorBody"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("CreatedResponse"));
        assert!(components.schemas.contains_key("DeletedResponse"));
        assert!(components.schemas.contains_key("CreateUserRequest"));
        assert!(components.schemas.contains_key("UserResponse"));
        assert!(components.schemas.contains_key("CreateAdvertRequest"));
        assert!(components.schemas.contains_key("DeleteAdvertRequest"));
        assert!(components.schemas.contains_key("AdvertResponse"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_body_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_body_schema = components.schemas.get("ErrorBody").unwrap();

        // Verify ErrorBody has the expected structure
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            error_body_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert_eq!(properties.len(), 1);
        } else {
            panic!("ErrorBody should be an object schema");
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let health_response_schema = components.schemas.get("HealthResponse").unwrap();

        // Verify HealthResponse has the expected structure
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            health_response_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("status"));
            assert!(properties.contains_key("version"));
            assert!(properties.contains_key("database"));
        } else {
            panic!("HealthResponse should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_cover_all_routes() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi.paths.paths.contains_key("/user"));
        assert!(openapi.paths.paths.contains_key("/user/{user_id}"));
        assert!(openapi.paths.paths.contains_key("/advert"));
        assert!(openapi.paths.paths.contains_key("/advert/{advert_id}"));

        // The user creation endpoint documents success and both failure modes
        let user_path = openapi.paths.paths.get("/user").unwrap();
        let user_post = user_path
            .operations
            .get(&utoipa::openapi::PathItemType::Post)
            .unwrap();
        assert!(user_post.responses.responses.contains_key("200"));
        assert!(user_post.responses.responses.contains_key("400"));
        assert!(user_post.responses.responses.contains_key("409"));

        // Advert deletion additionally documents the authorization failure
        let advert_path = openapi.paths.paths.get("/advert/{advert_id}").unwrap();
        let advert_delete = advert_path
            .operations
            .get(&utoipa::openapi::PathItemType::Delete)
            .unwrap();
        assert!(advert_delete.responses.responses.contains_key("403"));
        assert!(advert_delete.responses.responses.contains_key("404"));
    }
}
