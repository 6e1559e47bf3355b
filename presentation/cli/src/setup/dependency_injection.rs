use std::sync::Arc;

use events::BroadcastNotifier;
use logger::TracingLogger;
use persistence::cart::store::FileCartStorage;

use backend::auth::AuthServiceHttp;
use backend::client::BackendClient;
use backend::commissions::CommissionServiceHttp;
use backend::discount_tiers::DiscountTierServiceHttp;
use backend::payments::PaymentServiceHttp;
use backend::reports::ReportServiceHttp;

use business::application::backoffice::delete_commission::DeleteCommissionUseCaseImpl;
use business::application::backoffice::delete_discount_tier::DeleteDiscountTierUseCaseImpl;
use business::application::backoffice::list_commissions::ListCommissionsUseCaseImpl;
use business::application::backoffice::list_discount_tiers::ListDiscountTiersUseCaseImpl;
use business::application::backoffice::payment_status::PaymentStatusUseCaseImpl;
use business::application::backoffice::referral_report::ReferralReportUseCaseImpl;
use business::application::backoffice::revenue_report::RevenueReportUseCaseImpl;
use business::application::backoffice::save_commission::SaveCommissionUseCaseImpl;
use business::application::backoffice::save_discount_tier::SaveDiscountTierUseCaseImpl;
use business::application::backoffice::sign_in::SignInUseCaseImpl;
use business::application::backoffice::user_report::UserReportUseCaseImpl;
use business::application::backoffice::verify_session::VerifySessionUseCaseImpl;
use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::set_quantity::SetQuantityUseCaseImpl;
use business::application::catalog::get_product::GetProductUseCaseImpl;
use business::application::catalog::list_products::ListProductsUseCaseImpl;

use business::domain::backoffice::use_cases::delete_commission::DeleteCommissionUseCase;
use business::domain::backoffice::use_cases::delete_discount_tier::DeleteDiscountTierUseCase;
use business::domain::backoffice::use_cases::list_commissions::ListCommissionsUseCase;
use business::domain::backoffice::use_cases::list_discount_tiers::ListDiscountTiersUseCase;
use business::domain::backoffice::use_cases::payment_status::PaymentStatusUseCase;
use business::domain::backoffice::use_cases::referral_report::ReferralReportUseCase;
use business::domain::backoffice::use_cases::revenue_report::RevenueReportUseCase;
use business::domain::backoffice::use_cases::save_commission::SaveCommissionUseCase;
use business::domain::backoffice::use_cases::save_discount_tier::SaveDiscountTierUseCase;
use business::domain::backoffice::use_cases::sign_in::SignInUseCase;
use business::domain::backoffice::use_cases::user_report::UserReportUseCase;
use business::domain::backoffice::use_cases::verify_session::VerifySessionUseCase;
use business::domain::cart::notifier::CartNotifier;
use business::domain::cart::storage::CartStorage;
use business::domain::cart::use_cases::add::AddToCartUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove::RemoveFromCartUseCase;
use business::domain::cart::use_cases::set_quantity::SetQuantityUseCase;
use business::domain::catalog::store::ProductCatalog;
use business::domain::catalog::use_cases::get_product::GetProductUseCase;
use business::domain::catalog::use_cases::list_products::ListProductsUseCase;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub list_products: Arc<dyn ListProductsUseCase>,
    pub get_product: Arc<dyn GetProductUseCase>,

    pub get_cart: Arc<dyn GetCartUseCase>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    pub set_quantity: Arc<dyn SetQuantityUseCase>,
    pub clear_cart: Arc<dyn ClearCartUseCase>,

    pub sign_in: Arc<dyn SignInUseCase>,
    pub verify_session: Arc<dyn VerifySessionUseCase>,
    pub list_discount_tiers: Arc<dyn ListDiscountTiersUseCase>,
    pub save_discount_tier: Arc<dyn SaveDiscountTierUseCase>,
    pub delete_discount_tier: Arc<dyn DeleteDiscountTierUseCase>,
    pub list_commissions: Arc<dyn ListCommissionsUseCase>,
    pub save_commission: Arc<dyn SaveCommissionUseCase>,
    pub delete_commission: Arc<dyn DeleteCommissionUseCase>,
    pub payment_status: Arc<dyn PaymentStatusUseCase>,
    pub revenue_report: Arc<dyn RevenueReportUseCase>,
    pub user_report: Arc<dyn UserReportUseCase>,
    pub referral_report: Arc<dyn ReferralReportUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog = Arc::new(ProductCatalog::seeded());
        let storage: Arc<dyn CartStorage> =
            Arc::new(FileCartStorage::new(config.storage.cart_path.clone()));
        let notifier: Arc<dyn CartNotifier> = Arc::new(BroadcastNotifier::new());

        let auth_service = Arc::new(AuthServiceHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
        )));
        let tier_service = Arc::new(DiscountTierServiceHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
        )));
        let commission_service = Arc::new(CommissionServiceHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
        )));
        let payment_service = Arc::new(PaymentServiceHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
        )));
        let report_service = Arc::new(ReportServiceHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
        )));

        // Catalog use cases
        let list_products = Arc::new(ListProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product = Arc::new(GetProductUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart = Arc::new(GetCartUseCaseImpl {
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let add_to_cart = Arc::new(AddToCartUseCaseImpl {
            storage: storage.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart = Arc::new(RemoveFromCartUseCaseImpl {
            storage: storage.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let set_quantity = Arc::new(SetQuantityUseCaseImpl {
            storage: storage.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let clear_cart = Arc::new(ClearCartUseCaseImpl {
            storage,
            notifier,
            logger: logger.clone(),
        });

        // Back-office use cases
        let sign_in = Arc::new(SignInUseCaseImpl {
            auth: auth_service.clone(),
            logger: logger.clone(),
        });
        let verify_session = Arc::new(VerifySessionUseCaseImpl {
            auth: auth_service,
            logger: logger.clone(),
        });
        let list_discount_tiers = Arc::new(ListDiscountTiersUseCaseImpl {
            service: tier_service.clone(),
            logger: logger.clone(),
        });
        let save_discount_tier = Arc::new(SaveDiscountTierUseCaseImpl {
            service: tier_service.clone(),
            logger: logger.clone(),
        });
        let delete_discount_tier = Arc::new(DeleteDiscountTierUseCaseImpl {
            service: tier_service,
            logger: logger.clone(),
        });
        let list_commissions = Arc::new(ListCommissionsUseCaseImpl {
            service: commission_service.clone(),
            logger: logger.clone(),
        });
        let save_commission = Arc::new(SaveCommissionUseCaseImpl {
            service: commission_service.clone(),
            logger: logger.clone(),
        });
        let delete_commission = Arc::new(DeleteCommissionUseCaseImpl {
            service: commission_service,
            logger: logger.clone(),
        });
        let payment_status = Arc::new(PaymentStatusUseCaseImpl {
            service: payment_service,
            logger: logger.clone(),
        });
        let revenue_report = Arc::new(RevenueReportUseCaseImpl {
            service: report_service.clone(),
            logger: logger.clone(),
        });
        let user_report = Arc::new(UserReportUseCaseImpl {
            service: report_service.clone(),
            logger: logger.clone(),
        });
        let referral_report = Arc::new(ReferralReportUseCaseImpl {
            service: report_service,
            logger,
        });

        Self {
            list_products,
            get_product,
            get_cart,
            add_to_cart,
            remove_from_cart,
            set_quantity,
            clear_cart,
            sign_in,
            verify_session,
            list_discount_tiers,
            save_discount_tier,
            delete_discount_tier,
            list_commissions,
            save_commission,
            delete_commission,
            payment_status,
            revenue_report,
            user_report,
            referral_report,
        }
    }
}
