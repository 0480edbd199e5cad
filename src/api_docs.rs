use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::live,
        api::health::ready,
        api::items::list_items,
        api::items::get_item,
        api::items::create_item,
        api::items::update_item,
        api::items::delete_item,
    ),
    components(
        schemas(
            api::items::ItemDto,
            api::items::CreateItemDto,
            api::items::UpdateItemDto,
        )
    ),
    tags(
        (name = "catalog", description = "Catalog API")
    )
)]
pub struct ApiDoc;
