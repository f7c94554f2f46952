/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use appmesh::error::{
    CreateMeshError, CreateMeshErrorKind, DeleteVirtualNodeError, DeleteVirtualNodeErrorKind,
    DescribeMeshError, DescribeMeshErrorKind, TagResourceError, UpdateRouteError,
};
use appmesh::operation::{CreateMesh, DescribeMesh, ListMeshes, TagResource, UpdateRoute};
use appmesh::OperationShape;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::error::Error;

fn meta(code: &str, message: &str) -> smithy_types::Error {
    smithy_types::Error::builder()
        .code(code)
        .message(message)
        .request_id("5f2a94f3-a4c1-4a43-8a5e-1b0d9b0b5e11")
        .build()
}

#[test]
fn namespaced_codes_are_classified() {
    let err = DescribeMeshError::from_code(meta(
        "com.amazonaws.appmesh#NotFoundException:http://internal.amazon.com/coral/com.amazonaws.appmesh/",
        "Mesh app-mesh not found",
    ));
    assert!(err.is_not_found_exception());
    assert!(!err.is_bad_request_exception());
    assert_eq!(err.message(), Some("Mesh app-mesh not found"));
    assert_eq!(
        err.request_id(),
        Some("5f2a94f3-a4c1-4a43-8a5e-1b0d9b0b5e11")
    );
    assert_eq!(err.to_string(), "NotFoundException: Mesh app-mesh not found");
    match &err.kind {
        DescribeMeshErrorKind::NotFoundException(inner) => {
            assert_eq!(inner.message(), Some("Mesh app-mesh not found"))
        }
        other => panic!("unexpected kind {:?}", other),
    }
    assert_eq!(err.error_kind(), Some(ErrorKind::ClientError));
    assert!(!err.is_retryable());
    assert!(err.source().is_some());
}

#[test]
fn retryable_errors() {
    let err = CreateMeshError::from_code(meta("TooManyRequestsException", "slow down"));
    assert!(matches!(
        err.kind,
        CreateMeshErrorKind::TooManyRequestsException(_)
    ));
    assert_eq!(err.error_kind(), Some(ErrorKind::ThrottlingError));
    assert!(err.is_retryable());

    let err = UpdateRouteError::from_code(meta("ServiceUnavailableException", "try again"));
    assert!(err.is_service_unavailable_exception());
    assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));

    let err = TagResourceError::from_code(meta("InternalServerErrorException", "oops"));
    assert!(err.is_internal_server_error_exception());
    assert!(err.is_retryable());
}

#[test]
fn codes_outside_the_operation_are_unhandled() {
    // only Delete operations model ResourceInUseException
    let err = DescribeMeshError::from_code(meta("ResourceInUseException", "in use"));
    assert!(matches!(err.kind, DescribeMeshErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("ResourceInUseException"));
    assert_eq!(err.error_kind(), None);
    assert!(!err.is_retryable());

    let err = DeleteVirtualNodeError::from_code(meta("ResourceInUseException", "in use"));
    assert!(matches!(
        err.kind,
        DeleteVirtualNodeErrorKind::ResourceInUseException(_)
    ));
    assert!(err.is_resource_in_use_exception());

    let err = TagResourceError::from_code(meta("TooManyTagsException", "50 max"));
    assert!(err.is_too_many_tags_exception());
}

#[test]
fn unhandled_errors() {
    let err = CreateMeshError::unhandled("connection reset");
    assert_eq!(err.code(), None);
    assert_eq!(err.to_string(), "connection reset");
    assert!(err.source().is_some());
}

#[test]
fn exception_display() {
    let exception = appmesh::error::ConflictException::builder().build();
    assert_eq!(exception.to_string(), "ConflictException");
    let exception = appmesh::error::ConflictException::builder()
        .message("token reused")
        .build();
    assert_eq!(exception.to_string(), "ConflictException: token reused");
}

#[test]
fn operation_shapes() {
    assert_eq!(CreateMesh::NAME, "CreateMesh");
    assert!(CreateMesh::IDEMPOTENT);
    assert!(UpdateRoute::IDEMPOTENT);
    assert!(!DescribeMesh::IDEMPOTENT);
    assert!(!ListMeshes::IDEMPOTENT);
    assert!(!TagResource::IDEMPOTENT);

    let names = appmesh::operation::all_names();
    assert_eq!(names.len(), 28);
    assert!(names.contains(&"ListTagsForResource"));
    let mut sorted = names.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, names);
}

fn name_of<O: OperationShape>(_op: O) -> &'static str {
    O::NAME
}

#[test]
fn markers_are_operation_shapes() {
    assert_eq!(name_of(DescribeMesh::new()), "DescribeMesh");
    assert_eq!(name_of(TagResource::default()), "TagResource");
}
