/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use appmesh::error::BuildError;
use appmesh::model::{
    AwsCloudMapInstanceAttribute, AwsCloudMapServiceDiscovery, HttpRoute, HttpRouteAction,
    HttpRouteMatch, Listener, PortMapping, PortProtocol, RouteSpec, ServiceDiscovery,
    VirtualNodeSpec, WeightedTarget,
};
use appmesh::operation::{CreateRoute, CreateVirtualNode, DescribeMesh, TagResource};
use appmesh::validation::{ConstraintViolation, Validate};
use appmesh::Config;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn route_spec(weight: i32) -> RouteSpec {
    RouteSpec::builder()
        .http_route(
            HttpRoute::builder()
                .r#match(HttpRouteMatch::builder().prefix("/").build())
                .action(
                    HttpRouteAction::builder()
                        .weighted_targets(
                            WeightedTarget::builder()
                                .virtual_node("colorteller-blue")
                                .weight(weight)
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build()
}

fn listener(port: i32) -> Listener {
    Listener::builder()
        .port_mapping(
            PortMapping::builder()
                .port(port)
                .protocol(PortProtocol::Http)
                .build(),
        )
        .build()
}

fn validation_failure(err: BuildError) -> (String, ConstraintViolation) {
    match err {
        BuildError::Validation(err) => (err.path().to_string(), err.violation().clone()),
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn missing_required_member() {
    let err = DescribeMesh::builder()
        .build(&Config::builder().build())
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingField {
            field: "mesh_name",
            details: "mesh_name was not specified but it is required when building DescribeMeshInput",
        }
    );
}

#[test]
fn nested_range_violation_reports_path() {
    let err = CreateRoute::builder()
        .mesh_name("app-mesh")
        .virtual_router_name("colorteller")
        .route_name("colorteller-route")
        .spec(route_spec(101))
        .build(&Config::builder().build())
        .unwrap_err();
    assert_eq!(
        validation_failure(err),
        (
            "spec.httpRoute.action.weightedTargets[0].weight".to_string(),
            ConstraintViolation::Range {
                min: Some(0),
                max: Some(100),
                actual: 101
            }
        )
    );
}

#[test]
fn validation_can_be_disabled() {
    let config = Config::builder().validate_inputs(false).build();
    let input = CreateRoute::builder()
        .mesh_name("app-mesh")
        .virtual_router_name("colorteller")
        .route_name("colorteller-route")
        .spec(route_spec(101))
        .build(&config)
        .expect("validation is disabled");
    assert!(input.validate().is_err());
}

#[test]
fn list_length_and_unknown_enum_values() {
    let config = Config::builder().build();
    let err = CreateVirtualNode::builder()
        .mesh_name("app-mesh")
        .virtual_node_name("colorteller-blue")
        .spec(
            VirtualNodeSpec::builder()
                .listeners(listener(9080))
                .listeners(listener(9081))
                .build(),
        )
        .build(&config)
        .unwrap_err();
    assert_eq!(
        validation_failure(err),
        (
            "spec.listeners".to_string(),
            ConstraintViolation::Length {
                min: 0,
                max: Some(1),
                actual: 2
            }
        )
    );

    let err = CreateVirtualNode::builder()
        .mesh_name("app-mesh")
        .virtual_node_name("colorteller-blue")
        .spec(
            VirtualNodeSpec::builder()
                .listeners(
                    Listener::builder()
                        .port_mapping(
                            PortMapping::builder()
                                .port(9080)
                                .protocol(PortProtocol::from("quic"))
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build(&config)
        .unwrap_err();
    assert_eq!(
        validation_failure(err),
        (
            "spec.listeners[0].portMapping.protocol".to_string(),
            ConstraintViolation::UnknownVariant {
                value: "quic".to_string()
            }
        )
    );
}

#[test]
fn cloud_map_attribute_constraints() {
    let discovery = ServiceDiscovery::AwsCloudMap(
        AwsCloudMapServiceDiscovery::builder()
            .namespace_name("mesh.local")
            .service_name("colorteller")
            .attributes(
                AwsCloudMapInstanceAttribute::builder()
                    .key("ECS_TASK_DEFINITION_FAMILY")
                    .value("colorteller blue")
                    .build(),
            )
            .attributes(
                AwsCloudMapInstanceAttribute::builder()
                    .key("stage name")
                    .value("blue")
                    .build(),
            )
            .build(),
    );
    let err = discovery.validate_at("spec.serviceDiscovery").unwrap_err();
    assert_eq!(
        err.path(),
        "spec.serviceDiscovery.awsCloudMap.attributes[1].key"
    );
    assert!(matches!(
        err.violation(),
        ConstraintViolation::Pattern { .. }
    ));
}

#[test]
fn client_tokens() {
    let config = Config::builder()
        .make_token(|| "generated".to_string())
        .build();
    let input = appmesh::operation::CreateMesh::builder()
        .mesh_name("app-mesh")
        .build(&config)
        .unwrap();
    assert_eq!(input.client_token(), Some("generated"));

    let input = appmesh::operation::UpdateMesh::builder()
        .mesh_name("app-mesh")
        .client_token("caller-supplied")
        .build(&config)
        .unwrap();
    assert_eq!(input.client_token(), Some("caller-supplied"));
}

#[test]
fn tag_limits() {
    let config = Config::builder().build();
    let mut builder = TagResource::builder()
        .resource_arn("arn:aws:appmesh:us-west-2:123456789012:mesh/app-mesh");
    for i in 0..51 {
        builder = builder.tags(
            appmesh::model::TagRef::builder()
                .key(format!("key-{}", i))
                .value("v")
                .build(),
        );
    }
    let (path, _) = validation_failure(builder.build(&config).unwrap_err());
    assert_eq!(path, "tags");

    let err = TagResource::builder()
        .resource_arn("arn:aws:appmesh:us-west-2:123456789012:mesh/app-mesh")
        .tags(appmesh::model::TagRef::builder().key("").build())
        .build(&config)
        .unwrap_err();
    assert_eq!(validation_failure(err).0, "tags[0].key");
}

proptest! {
    #[test]
    fn port_mapping_ports(port in any::<i32>()) {
        let mapping = PortMapping::builder().port(port).protocol(PortProtocol::Tcp).build();
        prop_assert_eq!(mapping.validate().is_ok(), (1..=65535).contains(&port));
    }

    #[test]
    fn mesh_names(name in "[a-z-]{0,300}") {
        let result = DescribeMesh::builder()
            .mesh_name(name.clone())
            .build(&Config::builder().build());
        prop_assert_eq!(result.is_ok(), !name.is_empty() && name.len() <= 255);
    }
}
