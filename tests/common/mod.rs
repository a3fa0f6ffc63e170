#![allow(dead_code)]

use indexmap::IndexMap;
use serde_json::{json, Value};

use multiple_responses::model::{ResourceStore, ResponseSpec};

pub const PING_GET: &str = "ApiGatewayMethodPingGet";

/// `Resources` of a template compiled for a single `GET ping` endpoint, with
/// the nine default responses the generator adds.
pub fn compiled_resources() -> ResourceStore {
    let resources = json!({
        "ServerlessDeploymentBucket": { "Type": "AWS::S3::Bucket" },
        "PingLambdaFunction": {
            "Type": "AWS::Lambda::Function",
            "Properties": {
                "Code": {
                    "S3Bucket": { "Ref": "ServerlessDeploymentBucket" },
                    "S3Key": "1473599092284-2016-09-11T13:04:52.284Z/petstore.zip"
                },
                "FunctionName": "petstore-ping",
                "Handler": "src/ping/Ping.handler",
                "MemorySize": 128,
                "Role": { "Fn::GetAtt": ["IamRoleLambdaExecution", "Arn"] },
                "Runtime": "nodejs4.3",
                "Timeout": 2
            }
        },
        "ApiGatewayRestApi": {
            "Type": "AWS::ApiGateway::RestApi",
            "Properties": { "Name": "petstore" }
        },
        "ApiGatewayResourcePing": {
            "Type": "AWS::ApiGateway::Resource",
            "Properties": {
                "ParentId": { "Fn::GetAtt": ["ApiGatewayRestApi", "RootResourceId"] },
                "PathPart": "ping",
                "RestApiId": { "Ref": "ApiGatewayRestApi" }
            }
        },
        "ApiGatewayMethodPingGet": {
            "Type": "AWS::ApiGateway::Method",
            "Properties": {
                "AuthorizationType": "NONE",
                "HttpMethod": "GET",
                "MethodResponses": [
                    { "ResponseModels": {}, "ResponseParameters": {}, "StatusCode": 200 },
                    { "StatusCode": 400 },
                    { "StatusCode": 401 },
                    { "StatusCode": 403 },
                    { "StatusCode": 404 },
                    { "StatusCode": 422 },
                    { "StatusCode": 500 },
                    { "StatusCode": 502 },
                    { "StatusCode": 504 }
                ],
                "RequestParameters": {},
                "Integration": {
                    "IntegrationHttpMethod": "POST",
                    "Type": "AWS",
                    "Uri": "someuri",
                    "RequestTemplates": {
                        "application/json": "jsonrequesttemplate",
                        "application/x-www-form-urlencoded": "formencodedrequesttemplate"
                    },
                    "PassthroughBehavior": "NEVER",
                    "IntegrationResponses": [
                        { "StatusCode": 200, "ResponseParameters": {}, "ResponseTemplates": {} },
                        { "StatusCode": 400, "SelectionPattern": r".*\[400\].*" },
                        { "StatusCode": 401, "SelectionPattern": r".*\[401\].*" },
                        { "StatusCode": 403, "SelectionPattern": r".*\[403\].*" },
                        { "StatusCode": 404, "SelectionPattern": r".*\[404\].*" },
                        { "StatusCode": 422, "SelectionPattern": r".*\[422\].*" },
                        {
                            "StatusCode": 500,
                            "SelectionPattern": r".*(Process\s?exited\s?before\s?completing\s?request|\[500\]).*"
                        },
                        { "StatusCode": 502, "SelectionPattern": r".*\[502\].*" },
                        { "StatusCode": 504, "SelectionPattern": r".*\[504\].*" }
                    ]
                },
                "ResourceId": { "Ref": "ApiGatewayResourcePing" },
                "RestApiId": { "Ref": "ApiGatewayRestApi" }
            }
        }
    });

    match resources {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Parses a `responses` block the way it appears in a service description.
pub fn responses(value: Value) -> IndexMap<String, ResponseSpec> {
    serde_json::from_value(value).expect("valid responses block")
}

pub fn method_responses(store: &mut ResourceStore) -> &mut Vec<Value> {
    store[PING_GET]["Properties"]["MethodResponses"]
        .as_array_mut()
        .expect("MethodResponses")
}

pub fn integration_responses(store: &mut ResourceStore) -> &mut Vec<Value> {
    store[PING_GET]["Properties"]["Integration"]["IntegrationResponses"]
        .as_array_mut()
        .expect("IntegrationResponses")
}

/// Removes index `i` from both response lists of the ping method.
pub fn remove_at(store: &mut ResourceStore, i: usize) {
    method_responses(store).remove(i);
    integration_responses(store).remove(i);
}

/// Shallow-merges `patch` (an object) into `target` (an object).
pub fn extend(target: &mut Value, patch: Value) {
    let (Some(target), Value::Object(patch)) = (target.as_object_mut(), patch) else {
        panic!("extend expects two objects");
    };
    target.extend(patch);
}
