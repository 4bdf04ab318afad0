use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::enquiries::{
    dtos as enquiries_dtos, handlers as enquiries_handlers, models as enquiries_models,
};
use crate::features::navbar_categories::{dtos as navbar_dtos, handlers as navbar_handlers};
use crate::features::notifications::{
    dtos as notifications_dtos, handlers as notifications_handlers,
    models as notifications_models,
};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::sitemap::handlers as sitemap_handlers;
use crate::features::subcategories::{
    dtos as subcategories_dtos, handlers as subcategories_handlers,
};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::constants::ADMIN_TOKEN_COOKIE;
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::logout,
        auth::handlers::verify,
        // Navbar categories
        navbar_handlers::list_navbar_categories,
        navbar_handlers::get_navbar_category_by_slug,
        navbar_handlers::admin_list_navbar_categories,
        navbar_handlers::admin_get_navbar_category,
        navbar_handlers::admin_create_navbar_category,
        navbar_handlers::admin_update_navbar_category,
        navbar_handlers::admin_delete_navbar_category,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::list_categories_by_navbar,
        categories_handlers::get_category_by_slug,
        categories_handlers::admin_list_categories,
        categories_handlers::admin_get_category,
        categories_handlers::admin_create_category,
        categories_handlers::admin_update_category,
        categories_handlers::admin_delete_category,
        // Subcategories
        subcategories_handlers::list_subcategories,
        subcategories_handlers::list_subcategories_by_category,
        subcategories_handlers::get_subcategory_by_slug,
        subcategories_handlers::admin_list_subcategories,
        subcategories_handlers::admin_get_subcategory,
        subcategories_handlers::admin_create_subcategory,
        subcategories_handlers::admin_update_subcategory,
        subcategories_handlers::admin_delete_subcategory,
        // Products
        products_handlers::list_products,
        products_handlers::list_products_by_navbar,
        products_handlers::list_products_by_category,
        products_handlers::list_products_by_subcategory,
        products_handlers::get_product_by_slug,
        products_handlers::admin_list_products,
        products_handlers::admin_get_product,
        products_handlers::admin_create_product,
        products_handlers::admin_update_product,
        products_handlers::admin_delete_product,
        // Enquiries
        enquiries_handlers::create_contact_enquiry,
        enquiries_handlers::create_product_enquiry,
        enquiries_handlers::admin_list_contact_enquiries,
        enquiries_handlers::admin_get_contact_enquiry,
        enquiries_handlers::admin_update_contact_enquiry,
        enquiries_handlers::admin_delete_contact_enquiry,
        enquiries_handlers::admin_list_product_enquiries,
        enquiries_handlers::admin_get_product_enquiry,
        enquiries_handlers::admin_update_product_enquiry,
        enquiries_handlers::admin_delete_product_enquiry,
        // Notifications
        notifications_handlers::list_notifications,
        notifications_handlers::mark_notification_read,
        notifications_handlers::mark_all_notifications_read,
        notifications_handlers::delete_notification,
        // Uploads
        uploads_handlers::upload_image,
        uploads_handlers::delete_image,
        // SEO
        sitemap_handlers::sitemap_xml,
        sitemap_handlers::robots_txt,
    ),
    components(
        schemas(
            // Auth
            auth::AdminIdentity,
            auth::dtos::LoginRequestDto,
            auth::dtos::AdminSessionDto,
            ApiResponse<auth::dtos::AdminSessionDto>,
            // Navbar categories
            navbar_dtos::CreateNavbarCategoryDto,
            navbar_dtos::UpdateNavbarCategoryDto,
            navbar_dtos::NavbarCategoryResponseDto,
            navbar_dtos::NavbarCategoryRefDto,
            ApiResponse<navbar_dtos::NavbarCategoryResponseDto>,
            ApiResponse<Vec<navbar_dtos::NavbarCategoryResponseDto>>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryRefDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Subcategories
            subcategories_dtos::CreateSubCategoryDto,
            subcategories_dtos::UpdateSubCategoryDto,
            subcategories_dtos::SubCategoryResponseDto,
            subcategories_dtos::SubCategoryRefDto,
            ApiResponse<subcategories_dtos::SubCategoryResponseDto>,
            ApiResponse<Vec<subcategories_dtos::SubCategoryResponseDto>>,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductResponseDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            // Enquiries
            enquiries_models::EnquiryStatus,
            enquiries_dtos::CreateContactEnquiryDto,
            enquiries_dtos::CreateProductEnquiryDto,
            enquiries_dtos::UpdateEnquiryStatusDto,
            enquiries_dtos::ContactEnquiryResponseDto,
            enquiries_dtos::ProductEnquiryResponseDto,
            ApiResponse<enquiries_dtos::ContactEnquiryResponseDto>,
            ApiResponse<Vec<enquiries_dtos::ContactEnquiryResponseDto>>,
            ApiResponse<enquiries_dtos::ProductEnquiryResponseDto>,
            // Notifications
            notifications_models::NotificationKind,
            notifications_dtos::NotificationResponseDto,
            notifications_dtos::NotificationFeedResponse,
            notifications_dtos::MarkAllReadResponseDto,
            ApiResponse<notifications_dtos::NotificationResponseDto>,
            ApiResponse<notifications_dtos::MarkAllReadResponseDto>,
            // Uploads
            uploads_dtos::UploadImageForm,
            uploads_dtos::UploadedImageDto,
            uploads_dtos::DeleteImageDto,
            ApiResponse<uploads_dtos::UploadedImageDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin login and session"),
        (name = "navbar-categories", description = "Top-level navigation categories (public)"),
        (name = "categories", description = "Catalog categories (public)"),
        (name = "subcategories", description = "Catalog subcategories (public)"),
        (name = "products", description = "Catalog products (public)"),
        (name = "admin-catalog", description = "Catalog management (admin)"),
        (name = "enquiries", description = "Contact and quote request forms (public)"),
        (name = "admin-enquiries", description = "Enquiry inbox (admin)"),
        (name = "notifications", description = "Admin notification feed"),
        (name = "uploads", description = "Image upload proxy (admin)"),
        (name = "seo", description = "Sitemap and robots.txt"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Netcatalog API",
        version = "0.1.0",
        description = "API documentation for the networking equipment catalog",
    )
)]
pub struct ApiDoc;

/// Adds the admin cookie and Bearer security schemes to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(ADMIN_TOKEN_COOKIE))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
