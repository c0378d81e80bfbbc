// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::{BrowserSession, Locator, LocatorStrategy};
use crate::pages::PageObject;
use crate::utils::errors::ApiResult;
use async_trait::async_trait;

/// 结算时使用的账单地址
#[derive(Debug, Clone)]
pub struct BillingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// 支付方式
#[derive(Debug, Clone)]
pub enum PaymentMethod {
    CreditCard {
        number: String,
        expiry: String,
        cvv: String,
        holder: String,
    },
    BankTransfer {
        bank_name: String,
        account_name: String,
        account_number: String,
    },
    CashOnDelivery,
    GiftCard {
        number: String,
        validation_code: String,
    },
}

impl PaymentMethod {
    /// 下拉框选项值
    pub fn option_value(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard { .. } => "credit-card",
            PaymentMethod::BankTransfer { .. } => "bank-transfer",
            PaymentMethod::CashOnDelivery => "cash-on-delivery",
            PaymentMethod::GiftCard { .. } => "gift-card",
        }
    }
}

/// 结算页
///
/// 多步骤流程：购物车 → 登录 → 账单地址 → 支付
pub struct CheckoutPage {
    session: BrowserSession,
}

impl CheckoutPage {
    pub fn new(session: BrowserSession) -> Self {
        Self { session }
    }

    pub fn into_session(self) -> BrowserSession {
        self.session
    }

    fn proceed_button(step: u8) -> Locator {
        Locator::new(
            "checkout proceed button",
            vec![
                LocatorStrategy::TestAttr(format!("proceed-{}", step)),
                LocatorStrategy::Text {
                    selector: "button".into(),
                    needle: "Proceed to checkout".into(),
                },
            ],
        )
    }

    fn address_field(name: &str) -> Locator {
        Locator::new(
            format!("billing {} input", name),
            vec![
                LocatorStrategy::TestAttr(name.to_string()),
                LocatorStrategy::Id(name.to_string()),
                LocatorStrategy::Css(format!("input[formcontrolname=\"{}\"]", name)),
            ],
        )
    }

    fn payment_select() -> &'static str {
        "[data-test=\"payment-method\"], #payment-method"
    }

    fn confirm_button() -> Locator {
        Locator::new(
            "confirm payment button",
            vec![
                LocatorStrategy::TestAttr("finish".into()),
                LocatorStrategy::Text {
                    selector: "button".into(),
                    needle: "Confirm".into(),
                },
            ],
        )
    }

    fn confirmation_banner() -> Locator {
        Locator::new(
            "order confirmation banner",
            vec![
                LocatorStrategy::TestAttr("payment-success-message".into()),
                LocatorStrategy::Css(".alert-success".into()),
                LocatorStrategy::Css(".help-block".into()),
            ],
        )
    }

    /// 从购物车步骤前进
    pub async fn proceed_from_cart(&self) -> ApiResult<()> {
        self.session.require_click(&Self::proceed_button(1)).await
    }

    /// 登录步骤完成后前进
    pub async fn proceed_after_sign_in(&self) -> ApiResult<()> {
        self.session.require_click(&Self::proceed_button(2)).await
    }

    /// 填写账单地址并前进
    pub async fn fill_billing_address(&self, address: &BillingAddress) -> ApiResult<()> {
        self.session
            .require_fill(&Self::address_field("street"), &address.street)
            .await?;
        self.session
            .require_fill(&Self::address_field("city"), &address.city)
            .await?;
        self.session
            .require_fill(&Self::address_field("state"), &address.state)
            .await?;
        self.session
            .require_fill(&Self::address_field("country"), &address.country)
            .await?;
        self.session
            .require_fill(&Self::address_field("postal_code"), &address.postal_code)
            .await?;
        self.session.require_click(&Self::proceed_button(3)).await
    }

    /// 选择支付方式并填写对应字段
    pub async fn pay_with(&self, method: &PaymentMethod) -> ApiResult<()> {
        self.session
            .select(Self::payment_select(), method.option_value())
            .await?;

        match method {
            PaymentMethod::CreditCard {
                number,
                expiry,
                cvv,
                holder,
            } => {
                self.session
                    .require_fill(&Self::address_field("credit_card_number"), number)
                    .await?;
                self.session
                    .require_fill(&Self::address_field("expiration_date"), expiry)
                    .await?;
                self.session
                    .require_fill(&Self::address_field("cvv"), cvv)
                    .await?;
                self.session
                    .require_fill(&Self::address_field("card_holder_name"), holder)
                    .await?;
            }
            PaymentMethod::BankTransfer {
                bank_name,
                account_name,
                account_number,
            } => {
                self.session
                    .require_fill(&Self::address_field("bank_name"), bank_name)
                    .await?;
                self.session
                    .require_fill(&Self::address_field("account_name"), account_name)
                    .await?;
                self.session
                    .require_fill(&Self::address_field("account_number"), account_number)
                    .await?;
            }
            PaymentMethod::GiftCard {
                number,
                validation_code,
            } => {
                self.session
                    .require_fill(&Self::address_field("gift_card_number"), number)
                    .await?;
                self.session
                    .require_fill(&Self::address_field("validation_code"), validation_code)
                    .await?;
            }
            PaymentMethod::CashOnDelivery => {}
        }

        self.session.require_click(&Self::confirm_button()).await
    }

    /// 读取订单确认提示
    pub async fn confirmation_message(&self) -> Option<String> {
        self.session.text_of(&Self::confirmation_banner()).await
    }
}

#[async_trait]
impl PageObject for CheckoutPage {
    fn path(&self) -> &'static str {
        "/checkout"
    }

    fn session(&self) -> &BrowserSession {
        &self.session
    }
}
