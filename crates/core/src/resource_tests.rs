// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    ec2       = { "EC2", ResourceType::Ec2 },
    lower_ec2 = { "ec2", ResourceType::Ec2 },
    rdb       = { "RDB", ResourceType::Rdb },
    rds_alias = { "rds", ResourceType::Rdb },
    alb       = { "Alb", ResourceType::Alb },
)]
fn parse_known_types(input: &str, expected: ResourceType) {
    let parsed = ResourceType::parse(input);
    assert!(parsed.is_known());
    assert_eq!(parsed, expected);
}

#[test]
fn unknown_type_is_preserved() {
    let parsed = ResourceType::parse("Lambda");
    assert!(!parsed.is_known());
    assert_eq!(parsed.to_string(), "Lambda");
}

#[test]
fn resource_type_serializes_as_string() {
    let json = serde_json::to_string(&ResourceType::Rdb).unwrap();
    assert_eq!(json, "\"RDB\"");
    let parsed: ResourceType = serde_json::from_str("\"alb\"").unwrap();
    assert_eq!(parsed, ResourceType::Alb);
}

#[yare::parameterized(
    positive = { 0.5,           0.5 },
    zero     = { 0.0,           0.0 },
    negative = { -3.0,          0.0 },
    nan      = { f64::NAN,      0.0 },
    infinite = { f64::INFINITY, 0.0 },
)]
fn cost_is_sanitized(input: f64, expected: f64) {
    let record = ResourceRecord::builder().cost(input).build();
    assert_eq!(record.cost, expected);
}

#[test]
fn builder_defaults() {
    let record = ResourceRecord::builder().id("a").build();
    assert_eq!(record.id, "a");
    assert_eq!(record.resource_type, ResourceType::Ec2);
    assert_eq!(record.load_level, LoadLevel::Middle);
}
