// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 结算场景
///
/// 演示站点预置账户完成货到付款的完整下单流程。
/// 软失败（如促销横幅缺失）不阻断流程，但会体现在报告里

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use shopcheck::browser::BrowserSession;
    use shopcheck::config::settings::ApiConfig;
    use shopcheck::pages::{
        BillingAddress, CartPage, CheckoutPage, LoginPage, PageObject, PaymentMethod, ProductsPage,
    };

    use crate::skip_unless_e2e;

    fn demo_address() -> BillingAddress {
        BillingAddress {
            street: "Test street 98".to_string(),
            city: "Vienna".to_string(),
            state: "Vienna".to_string(),
            country: "Austria".to_string(),
            postal_code: "1010".to_string(),
        }
    }

    #[tokio::test]
    async fn test_line_item_removal_empties_cart() {
        skip_unless_e2e!();

        let config = ApiConfig::resolve().expect("profile should resolve");
        let session = BrowserSession::new().await.expect("browser session");

        let products = ProductsPage::new(session);
        products.open(&config.web_url).await.expect("open overview");
        products.search("pliers").await.expect("search");
        products
            .open_product("Combination Pliers")
            .await
            .expect("open product detail");

        let cart = CartPage::new(products.into_session());
        cart.add_current_product(1).await.expect("add to cart");
        tokio::time::sleep(Duration::from_millis(500)).await;
        cart.open_cart().await.expect("open cart");

        let before = cart.line_item_names().await.expect("line items");
        assert!(!before.is_empty());

        let outcome = cart.remove_line_item(0).await;
        assert!(outcome.is_hit(), "delete button should resolve");
        tokio::time::sleep(Duration::from_millis(500)).await;

        let after = cart.line_item_names().await.expect("line items after");
        assert!(after.len() < before.len(), "removal should shrink the cart");
    }

    #[tokio::test]
    async fn test_cash_on_delivery_checkout_journey() {
        skip_unless_e2e!();

        let config = ApiConfig::resolve().expect("profile should resolve");
        let session = BrowserSession::new().await.expect("browser session");

        // 1. 找到商品并打开详情
        let products = ProductsPage::new(session);
        products.open(&config.web_url).await.expect("open overview");
        products.search("pliers").await.expect("search");
        products
            .open_product("Combination Pliers")
            .await
            .expect("open product detail");

        // 2. 加入购物车并进入结算
        let cart = CartPage::new(products.into_session());
        cart.add_current_product(1).await.expect("add to cart");
        tokio::time::sleep(Duration::from_millis(500)).await;
        cart.open_cart().await.expect("open cart");

        let items = cart.line_item_names().await.expect("line items");
        assert!(
            items.iter().any(|n| n.contains("Pliers")),
            "cart should contain the added product: {items:?}"
        );
        assert!(cart.total().await.is_some(), "cart total should render");

        // 3. 多步骤结算：登录、账单地址、货到付款
        let checkout = CheckoutPage::new(cart.into_session());
        checkout.proceed_from_cart().await.expect("proceed from cart");

        let login = LoginPage::new(checkout.into_session());
        login
            .login("customer@practicesoftwaretesting.com", "welcome01")
            .await
            .expect("sign in during checkout");
        tokio::time::sleep(Duration::from_millis(1_000)).await;

        let checkout = CheckoutPage::new(login.into_session());
        checkout
            .proceed_after_sign_in()
            .await
            .expect("proceed after sign in");
        checkout
            .fill_billing_address(&demo_address())
            .await
            .expect("billing address");
        checkout
            .pay_with(&PaymentMethod::CashOnDelivery)
            .await
            .expect("payment");

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        let message = checkout.confirmation_message().await;
        assert!(
            message.is_some(),
            "expected a confirmation banner, soft failures: {:?}",
            checkout.session().report().soft_fails()
        );
    }
}
