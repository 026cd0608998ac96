use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClientDoc { pub client_id: i32, pub first_name: String, pub last_name: String, pub date_of_birth: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MechanicDoc { pub mechanic_id: i32, pub licence_number: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PerformedServiceDoc { pub name: String, pub service_fee: f64 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct VisitDoc {
    pub visit_id: i32,
    pub date: String,
    pub client: ClientDoc,
    pub mechanic: MechanicDoc,
    pub visit_services: Vec<PerformedServiceDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RequestedServiceDoc { pub service_name: String, pub service_fee: f64 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NewVisitDoc {
    pub visit_id: i32,
    pub client_id: i32,
    pub mechanic_licence_number: String,
    pub services: Vec<RequestedServiceDoc>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::visits::get_visit,
        crate::routes::visits::create_visit,
    ),
    components(
        schemas(
            HealthResponse,
            ClientDoc,
            MechanicDoc,
            PerformedServiceDoc,
            VisitDoc,
            RequestedServiceDoc,
            NewVisitDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "visits")
    )
)]
pub struct ApiDoc;
