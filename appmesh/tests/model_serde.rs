/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use appmesh::model::{
    Backend, DnsServiceDiscovery, EgressFilterType, Listener, MeshStatusCode, PortMapping,
    PortProtocol, ServiceDiscovery, VirtualNodeSpec, VirtualServiceBackend,
};
use appmesh::output::{DescribeMeshOutput, ListMeshesOutput};
use appmesh::{Config, Instant};
use protocol_test_helpers::{assert_ok, forbid_members, require_members, validate_body};

fn config() -> Config {
    Config::builder()
        .region("us-west-2")
        .make_token(|| "00000000-0000-4000-8000-000000000000".to_string())
        .build()
}

#[test]
fn create_virtual_node_body() {
    let input = appmesh::operation::CreateVirtualNode::builder()
        .mesh_name("app-mesh")
        .virtual_node_name("colorteller-blue")
        .spec(
            VirtualNodeSpec::builder()
                .listeners(
                    Listener::builder()
                        .port_mapping(
                            PortMapping::builder()
                                .port(9080)
                                .protocol(PortProtocol::Http)
                                .build(),
                        )
                        .build(),
                )
                .backends(Backend::VirtualService(
                    VirtualServiceBackend::builder()
                        .virtual_service_name("tcpecho.mesh.local")
                        .build(),
                ))
                .service_discovery(ServiceDiscovery::Dns(
                    DnsServiceDiscovery::builder()
                        .hostname("colorteller-blue.mesh.local")
                        .build(),
                ))
                .build(),
        )
        .build(&config())
        .expect("valid input");

    let body = serde_json::to_string(&input).unwrap();
    assert_ok(validate_body(
        &body,
        r#"{
            "clientToken": "00000000-0000-4000-8000-000000000000",
            "meshName": "app-mesh",
            "virtualNodeName": "colorteller-blue",
            "spec": {
                "listeners": [
                    { "portMapping": { "port": 9080, "protocol": "http" } }
                ],
                "backends": [
                    { "virtualService": { "virtualServiceName": "tcpecho.mesh.local" } }
                ],
                "serviceDiscovery": {
                    "dns": { "hostname": "colorteller-blue.mesh.local" }
                }
            }
        }"#,
    ));
    assert_ok(forbid_members(
        &body,
        &["/tags", "/spec/logging", "/spec/backendDefaults", "/spec/listeners/0/tls"],
    ));
}

#[test]
fn describe_mesh_response() {
    let body = r#"{
        "mesh": {
            "meshName": "app-mesh",
            "metadata": {
                "arn": "arn:aws:appmesh:us-west-2:123456789012:mesh/app-mesh",
                "createdAt": 1580428800.123,
                "lastUpdatedAt": 1580428800,
                "uid": "a1b2c3d4-5678-90ab-cdef-11111EXAMPLE",
                "version": 1
            },
            "spec": { "egressFilter": { "type": "DROP_ALL" } },
            "status": { "status": "ACTIVE" }
        }
    }"#;
    let output: DescribeMeshOutput = serde_json::from_str(body).unwrap();
    let mesh = output.mesh().expect("mesh is set");
    assert_eq!(mesh.mesh_name(), Some("app-mesh"));
    let metadata = mesh.metadata().expect("metadata is set");
    assert_eq!(metadata.version(), Some(1));
    assert_eq!(
        metadata.last_updated_at(),
        Some(&Instant::from_epoch_seconds(1580428800))
    );
    let created_at = metadata.created_at().expect("createdAt is set");
    assert_eq!(created_at.epoch_seconds(), 1580428800);
    assert!(created_at.has_nanos());
    assert_eq!(
        mesh.spec()
            .and_then(|spec| spec.egress_filter())
            .and_then(|filter| filter.r#type()),
        Some(&EgressFilterType::DropAll)
    );
    assert_eq!(
        mesh.status().and_then(|status| status.status()),
        Some(&MeshStatusCode::Active)
    );
}

#[test]
fn unknown_enum_values_survive_a_round_trip() {
    let body = r#"{"meshes":[],"nextToken":"abc"}"#;
    let output: ListMeshesOutput = serde_json::from_str(body).unwrap();
    assert_eq!(output.meshes(), Some(&[][..]));

    let status: appmesh::model::MeshStatus =
        serde_json::from_str(r#"{"status":"PENDING"}"#).unwrap();
    assert_eq!(
        status.status(),
        Some(&MeshStatusCode::Unknown("PENDING".to_string()))
    );
    assert_eq!(
        serde_json::to_string(&status).unwrap(),
        r#"{"status":"PENDING"}"#
    );
}

#[test]
fn unions_serialize_with_a_single_key() {
    let discovery = ServiceDiscovery::Dns(
        DnsServiceDiscovery::builder()
            .hostname("service.local")
            .build(),
    );
    let body = serde_json::to_string(&discovery).unwrap();
    assert_ok(require_members(&body, &["/dns/hostname"]));
    assert_ok(forbid_members(&body, &["/awsCloudMap"]));
    assert!(discovery.is_dns());
    assert!(discovery.as_aws_cloud_map().is_err());
}

#[test]
fn empty_outputs() {
    let output: appmesh::output::TagResourceOutput = serde_json::from_str("{}").unwrap();
    assert_eq!(output, appmesh::output::TagResourceOutput::builder().build());
}
