//! Table definitions created at startup.
//!
//! `seq` is an insertion counter used as the final sort key, so rows with
//! equal sort values come back in creation order.

pub(crate) const STATEMENTS: [&str; 2] = [CREATE_USERS, CREATE_PROPERTIES];

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
    id CHAR(36) NOT NULL,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone VARCHAR(32) NULL,
    password_hash VARCHAR(255) NOT NULL,
    role VARCHAR(16) NOT NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    PRIMARY KEY (seq),
    UNIQUE KEY uk_users_id (id),
    UNIQUE KEY uk_users_email (email)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
"#;

// city uses a binary collation: the city filter is an exact match
const CREATE_PROPERTIES: &str = r#"
CREATE TABLE IF NOT EXISTS properties (
    seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
    id CHAR(36) NOT NULL,
    title VARCHAR(255) NOT NULL,
    description TEXT NOT NULL,
    price DOUBLE NOT NULL,
    address VARCHAR(255) NOT NULL,
    city VARCHAR(128) COLLATE utf8mb4_bin NOT NULL,
    state VARCHAR(128) NOT NULL,
    zip VARCHAR(32) NOT NULL,
    country VARCHAR(128) NOT NULL,
    latitude DOUBLE NULL,
    longitude DOUBLE NULL,
    bedrooms INT UNSIGNED NOT NULL,
    bathrooms DOUBLE NOT NULL,
    area DOUBLE NOT NULL,
    year_built INT NOT NULL,
    property_type VARCHAR(16) NOT NULL,
    status VARCHAR(16) NOT NULL,
    amenities TEXT NOT NULL,
    images TEXT NOT NULL,
    agent_id CHAR(36) NOT NULL,
    agent_name VARCHAR(255) NOT NULL,
    agent_phone VARCHAR(32) NULL,
    agent_email VARCHAR(255) NOT NULL,
    featured BOOLEAN NOT NULL DEFAULT FALSE,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    PRIMARY KEY (seq),
    UNIQUE KEY uk_properties_id (id),
    KEY idx_properties_city (city),
    KEY idx_properties_agent (agent_id),
    KEY idx_properties_created (created_at),
    KEY idx_properties_price (price)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
"#;
